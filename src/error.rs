use thiserror::Error;

/// A closed range `[begin, end]` that does not describe a sub-range of the sequence.
///
/// Returned before the sequence is touched, so a rejected call leaves it unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// `end` must index an element of the sequence.
    #[error("range end {end} is out of bounds for a sequence of length {len}")]
    EndOutOfBounds { end: usize, len: usize },

    /// `begin` must not lie past `end`.
    #[error("range begin {begin} is past range end {end}")]
    BeginAfterEnd { begin: usize, end: usize },
}
