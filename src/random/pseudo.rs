//! Pseudo-random sources
//!
//! Uses the `rand` crate. `ThreadRandom` is the production source,
//! `SeededRandom` gives reproducible output for a fixed seed and
//! `ConstantRandom` pins every draw for tests.

use crate::random::RandomSource;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Thread-local pseudo-random source
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    /// Create a new thread-local source
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn name(&self) -> &'static str {
        "thread"
    }

    fn float(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Seeded pseudo-random source for deterministic output
pub struct SeededRandom {
    rng: Mutex<rand::rngs::StdRng>,
}

impl SeededRandom {
    /// Create a new seeded source
    ///
    /// Using the same seed will produce the same sequence of random values.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(rand::rngs::StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn name(&self) -> &'static str {
        "seeded"
    }

    fn float(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen::<f64>()
    }
}

/// Source that returns the same value on every draw
#[derive(Debug, Clone, Copy)]
pub struct ConstantRandom {
    value: f64,
}

impl ConstantRandom {
    /// Create a constant source; `value` is clamped into [0, 1)
    pub fn new(value: f64) -> Self {
        Self {
            value: value.clamp(0.0, 1.0 - f64::EPSILON),
        }
    }
}

impl RandomSource for ConstantRandom {
    fn name(&self) -> &'static str {
        "constant"
    }

    fn float(&self) -> f64 {
        self.value
    }
}
