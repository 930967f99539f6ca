use crate::sequence::Sequence;

/// How the pivot of each partition step is picked.
///
/// Whatever the policy, the chosen element is exchanged to the leftmost position of the range
/// before partitioning, so the partition itself always works with a leftmost pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotPolicy {
    /// Always the first element of the range. Quadratic on sorted and reverse-sorted input.
    Leftmost,
    /// Median of the first, middle and last element of the range.
    #[default]
    MedianOfThree,
    /// A pseudo-random element of the range, deterministic for a given sequence length.
    ///
    /// The generator is seeded from the length only, so it breaks up accidental patterns such as
    /// sorted runs but gives no protection against input crafted for a known length.
    Random,
}

impl PivotPolicy {
    pub fn name(self) -> &'static str {
        match self {
            PivotPolicy::Leftmost => "leftmost",
            PivotPolicy::MedianOfThree => "median3",
            PivotPolicy::Random => "random",
        }
    }
}

/// Per-sort pivot selection state.
pub(crate) struct PivotChooser {
    policy: PivotPolicy,
    random: u64,
}

impl PivotChooser {
    pub(crate) fn new(policy: PivotPolicy, len: usize) -> Self {
        // Xorshift must not be seeded with zero.
        Self {
            policy,
            random: (len as u64) | 1,
        }
    }

    /// Returns an index in `[begin, end]`. Requires `begin < end < v.len()`.
    pub(crate) fn choose<S, F>(&mut self, v: &S, begin: usize, end: usize, is_less: &mut F) -> usize
    where
        S: Sequence + ?Sized,
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        debug_assert!(begin < end && end < v.len());

        match self.policy {
            PivotPolicy::Leftmost => begin,
            PivotPolicy::MedianOfThree => {
                if end - begin < 2 {
                    return begin;
                }
                let mid = begin + (end - begin) / 2;
                median3(v, begin, mid, end, is_less)
            }
            PivotPolicy::Random => {
                let width = (end - begin + 1) as u64;
                begin + (self.next_u64() % width) as usize
            }
        }
    }

    // Pseudorandom number generator from the "Xorshift RNGs" paper by George Marsaglia.
    fn next_u64(&mut self) -> u64 {
        self.random ^= self.random << 13;
        self.random ^= self.random >> 7;
        self.random ^= self.random << 17;
        self.random
    }
}

/// Returns the index of the median of the elements at `a`, `b` and `c`.
fn median3<S, F>(v: &S, a: usize, b: usize, c: usize, is_less: &mut F) -> usize
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    // Avoids the third comparison when `a` is already the median.
    let x = is_less(v.get(a), v.get(b));
    let y = is_less(v.get(a), v.get(c));
    if x == y {
        // If x=y=0 then b, c <= a. In this case we want to return max(b, c).
        // If x=y=1 then a < b, c. In this case we want to return min(b, c).
        // By toggling the outcome of b < c using XOR x we get this behavior.
        let z = is_less(v.get(b), v.get(c));
        if z ^ x {
            c
        } else {
            b
        }
    } else {
        // Either c <= a < b or b <= a < c, thus a is our median.
        a
    }
}
