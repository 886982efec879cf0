//! Inclusive random integers.

#[cfg(test)]
#[path = "random_test.rs"]
mod random_test;

use rand::Rng;

/// Uniform integer in `[min, max]`, both ends inclusive. Reversed bounds are
/// swapped rather than rejected.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(lo..=hi)
}
