//! [`RandomSource`] implementations. [`ThreadRandom`] and [`SeededRandom`]
//! back the deployed service; [`FixedRandom`] is a testing aid for pinning
//! the decision to one bucket.

use crate::domain::ports::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Process default: a fresh handle to the thread-local generator per draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible sequence for staging environments.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&self) -> f64 {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen::<f64>()
    }
}

/// Testing aid: always returns the same value, so every decision lands in
/// the same bucket. Not selectable from configuration.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl FixedRandom {
    /// A value landing in the middle of bucket `draw` out of `buckets`.
    pub fn bucket(draw: u32, buckets: u32) -> Self {
        Self((f64::from(draw) + 0.5) / f64::from(buckets.max(1)))
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_in_unit_interval() {
        let source = ThreadRandom;
        for _ in 0..1_000 {
            let value = source.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let first: Vec<f64> = (0..16).map(|_| a.next_unit()).collect();
        let second: Vec<f64> = (0..16).map(|_| b.next_unit()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fixed_bucket_midpoints() {
        assert_eq!(FixedRandom::bucket(0, 4).next_unit(), 0.125);
        assert_eq!(FixedRandom::bucket(3, 4).next_unit(), 0.875);
    }
}
