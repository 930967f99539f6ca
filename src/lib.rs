pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

/// Declares `SortImpl` for a module that provides free `sort` and `sort_by` functions.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl {}

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod error;
pub mod pivot;
pub mod quicksort;
pub mod sequence;

pub mod unstable;

pub mod patterns;

pub use error::SortError;
pub use pivot::PivotPolicy;
pub use quicksort::Quicksort;
pub use sequence::Sequence;
