use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;

/// Provides the dataset orderings the harness benchmarks against, plus a set
/// of integer patterns for tests and benches.

// --- Ordering producers ---

/// Ascending copy of `base`.
pub fn sorted_copy<T: Ord + Clone>(base: &[T]) -> Vec<T> {
    let mut v = base.to_vec();
    v.sort();
    v
}

/// Shuffled copy of `base`, drawn from the process-wide random source.
pub fn shuffled_copy<T: Clone>(base: &[T]) -> Vec<T> {
    let mut v = base.to_vec();
    v.shuffle(&mut new_rng());
    v
}

/// Shuffled copy of `base` with an explicit seed, for reproducible runs.
pub fn shuffled_seeded<T: Clone>(base: &[T], seed: u64) -> Vec<T> {
    let mut v = base.to_vec();
    v.shuffle(&mut StdRng::seed_from_u64(seed));
    v
}

/// Descending copy of `base`, the reverse of the ascending ordering.
pub fn reversed_copy<T: Ord + Clone>(base: &[T]) -> Vec<T> {
    let mut v = sorted_copy(base);
    v.reverse();
    v
}

// --- Integer patterns ---

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();

    (0..size).map(|_| rng.gen::<i32>()).collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect::<Vec<_>>()
}

// --- Seed plumbing ---

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

fn new_rng() -> StdRng {
    // Random seed per process, but cached so test failures stay reproducible
    // once the harness has printed it.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}
