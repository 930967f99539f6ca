use std::cmp::Ordering;

use crate::pivot::PivotPolicy;
use crate::quicksort::Quicksort;

sort_impl!("hoare_random");

const QUICKSORT: Quicksort = Quicksort::new(PivotPolicy::Random);

pub fn sort<T: Ord>(data: &mut [T]) {
    QUICKSORT.sort(data);
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    QUICKSORT.sort_by(data, compare);
}
