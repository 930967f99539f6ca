// Hoare partition with the literal leftmost pivot, quadratic on sorted input.
pub mod hoare_leftmost;

// Hoare partition with a median of 3 pivot.
pub mod hoare_median3;

// Hoare partition with a pseudo-random pivot.
pub mod hoare_random;

// Reference sort, slice::sort_unstable.
pub mod rust_std;
