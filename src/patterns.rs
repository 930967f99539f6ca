//! Input generators for tests and benchmarks.
//!
//! Everything random is derived from one seed, so a failing input can be reproduced by setting
//! `OVERRIDE_SEED` to the value reported by [`random_init_seed`].

use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::prelude::*;
use rand_distr::Normal;
#[allow(deprecated)]
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    let seed = env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| thread_rng().gen());

    tracing::info!(seed, "pattern seed");
    seed
});

/// Seed used by every generator in this module for the lifetime of the process.
pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Uniformly distributed values over the whole `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Uniformly distributed values in `range`, which must not be empty.
pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Values drawn from `0..20`, lots of duplicates.
pub fn random_d20(len: usize) -> Vec<i32> {
    random_uniform(len, 0..20)
}

/// Zipf distributed values in `1..=len`, a few values dominate.
#[allow(deprecated)]
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).expect("zipf exponent must be positive");

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Ascending values where `sorted_percent` of the prefix is in order and the rest is random.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len.min(len)].sort_unstable();
    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Alternating ascending and descending runs of random length.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut v = random(len);
    let chunk_len = len.div_ceil(saw_count.max(1));

    for (i, chunk) in v.chunks_mut(chunk_len).enumerate() {
        if i % 2 == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}

/// Ascending first half followed by a descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let mid = len / 2;
    v[..mid].sort_unstable();
    v[mid..].sort_unstable_by(|a, b| b.cmp(a));
    v
}

/// Large magnitude doubles in `-999_999.0..999_999.0`, never NaN.
pub fn random_f64(len: usize) -> Vec<f64> {
    let mut rng = new_rng();
    (0..len)
        .map(|_| rng.gen_range(-999_999.0..999_999.0))
        .collect()
}

/// Normally distributed doubles around zero with a standard deviation of `999_999`.
pub fn random_normal_f64(len: usize) -> Vec<f64> {
    let mut rng = new_rng();
    let dist = Normal::new(0.0, 999_999.0).expect("standard deviation is finite and positive");
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Short lowercase strings, with shared prefixes common enough to exercise the tie breaking of
/// lexicographic order.
pub fn random_strings(len: usize) -> Vec<String> {
    let mut rng = new_rng();
    (0..len)
        .map(|_| {
            let str_len = rng.gen_range(0..6);
            (0..str_len)
                .map(|_| rng.gen_range(b'a'..=b'e') as char)
                .collect()
        })
        .collect()
}
