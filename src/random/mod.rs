//! Random number sources
//!
//! This module defines the `RandomSource` trait used by every part of the
//! scoring pipeline that needs randomness: estimator fallbacks, the street
//! lighting jitter, danger-zone placement and the alert feed.
//!
//! ## Flex Point
//! Adding a new source requires:
//! 1. Implement `RandomSource` (only `float()` is required)
//! 2. Register it in `get_source` below

pub mod pseudo;

use std::sync::Arc;

/// Trait for random number sources
///
/// Implementations must be thread-safe (Send + Sync) to work with async server.
pub trait RandomSource: Send + Sync {
    /// Returns the source name (e.g., "thread", "seeded")
    fn name(&self) -> &'static str;

    /// Generate a single random float uniformly distributed in [0.0, 1.0)
    fn float(&self) -> f64;

    /// Uniform float in [min, max)
    fn uniform(&self, min: f64, max: f64) -> f64 {
        min + self.float() * (max - min)
    }

    /// Uniform integer in [0, n)
    ///
    /// Returns 0 when `n` is 0.
    fn below(&self, n: usize) -> usize {
        let idx = (self.float() * n as f64).floor() as usize;
        idx.min(n.saturating_sub(1))
    }

    /// Uniform integer in [min, min + span)
    fn int_in(&self, min: u32, span: u32) -> u32 {
        min + self.below(span as usize) as u32
    }
}

/// Get a random source
///
/// A seed selects the reproducible source, otherwise the thread-local one.
pub fn get_source(seed: Option<u64>) -> Arc<dyn RandomSource> {
    match seed {
        Some(seed) => Arc::new(pseudo::SeededRandom::new(seed)),
        None => Arc::new(pseudo::ThreadRandom::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::pseudo::{ConstantRandom, SeededRandom};
    use super::*;

    #[test]
    fn test_uniform_bounds() {
        let rng = SeededRandom::new(7);
        for _ in 0..1000 {
            let v = rng.uniform(-0.01, 0.01);
            assert!((-0.01..0.01).contains(&v), "{} out of range", v);
        }
    }

    #[test]
    fn test_below_never_reaches_n() {
        let rng = ConstantRandom::new(0.999_999_999);
        assert_eq!(rng.below(5), 4);
        assert_eq!(rng.below(0), 0);

        let rng = ConstantRandom::new(0.0);
        assert_eq!(rng.below(5), 0);
    }

    #[test]
    fn test_int_in() {
        let rng = ConstantRandom::new(0.5);
        assert_eq!(rng.int_in(70, 30), 85);
    }

    #[test]
    fn test_get_source() {
        assert_eq!(get_source(None).name(), "thread");
        assert_eq!(get_source(Some(42)).name(), "seeded");
    }
}
