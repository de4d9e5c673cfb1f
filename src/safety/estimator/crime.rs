//! Crime-rate placeholder model
//!
//! `75 + ((lat + lng) mod 40) + 10 * sin(now_ms / 1e6)`, clamped to [30, 100].
//! The remainder keeps the sign of `lat + lng`.

use crate::clock::Clock;
use crate::error::Result;
use crate::geo::Coordinates;
use crate::safety::estimator::{FallbackRange, ScoreEstimator};
use crate::safety::types::FactorKind;
use async_trait::async_trait;
use std::sync::Arc;

const BASE_SCORE: f64 = 75.0;
const LOCATION_MODULUS: f64 = 40.0;
const TIME_AMPLITUDE: f64 = 10.0;
const TIME_PERIOD_DIVISOR: f64 = 1_000_000.0;
const MIN_SCORE: f64 = 30.0;
const MAX_SCORE: f64 = 100.0;

/// Crime-rate estimator
pub struct CrimeEstimator {
    clock: Arc<dyn Clock>,
}

impl CrimeEstimator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Score for a position at a given instant
    pub fn score_at(lat: f64, lng: f64, now_millis: i64) -> f64 {
        let location_variation = (lat + lng) % LOCATION_MODULUS;
        let time_variation = (now_millis as f64 / TIME_PERIOD_DIVISOR).sin() * TIME_AMPLITUDE;

        (BASE_SCORE + location_variation + time_variation).clamp(MIN_SCORE, MAX_SCORE)
    }
}

#[async_trait]
impl ScoreEstimator for CrimeEstimator {
    fn factor(&self) -> FactorKind {
        FactorKind::Crime
    }

    fn fallback(&self) -> FallbackRange {
        FallbackRange::new(50, 40)
    }

    async fn measure(&self, location: &Coordinates) -> Result<f64> {
        Ok(Self::score_at(
            location.lat,
            location.lng,
            self.clock.now_millis(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use approx::assert_relative_eq;

    #[test]
    fn test_origin_at_epoch() {
        assert_relative_eq!(CrimeEstimator::score_at(0.0, 0.0, 0), 75.0);
    }

    #[test]
    fn test_negative_remainder_keeps_sign() {
        // 40.7128 - 74.006 = -33.2932
        assert_relative_eq!(
            CrimeEstimator::score_at(40.7128, -74.006, 0),
            75.0 - 33.2932,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_time_variation_peak() {
        // sin(pi / 2) = 1
        let now = (std::f64::consts::FRAC_PI_2 * TIME_PERIOD_DIVISOR).round() as i64;
        assert_relative_eq!(CrimeEstimator::score_at(0.0, 0.0, now), 85.0, epsilon = 1e-6);
    }

    #[test]
    fn test_clamped_both_ends() {
        assert_eq!(CrimeEstimator::score_at(10.0, 15.0, 0), 100.0);
        let trough = (3.0 * std::f64::consts::FRAC_PI_2 * TIME_PERIOD_DIVISOR).round() as i64;
        assert_eq!(CrimeEstimator::score_at(-20.0, -19.9, trough), 30.0);
    }

    #[tokio::test]
    async fn test_measure_uses_injected_clock() {
        let estimator = CrimeEstimator::new(Arc::new(FixedClock::new(0)));
        let score = estimator
            .measure(&Coordinates::new(1.0, 2.0, "x"))
            .await
            .unwrap();
        assert_relative_eq!(score, 78.0);
    }
}
