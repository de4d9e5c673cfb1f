//! Traffic-safety placeholder model
//!
//! Denser (closer to the reference city) means less safe:
//! `80 - min(30, 5 * d)`, clamped to [40, 100].

use crate::error::Result;
use crate::geo::Coordinates;
use crate::safety::estimator::{urban_distance, FallbackRange, ScoreEstimator};
use crate::safety::types::FactorKind;
use async_trait::async_trait;

const BASE_SCORE: f64 = 80.0;
const DENSITY_FACTOR: f64 = 5.0;
const MAX_PENALTY: f64 = 30.0;

/// Traffic-safety estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct TrafficEstimator;

impl TrafficEstimator {
    pub fn score_at(lat: f64, lng: f64) -> f64 {
        let penalty = (urban_distance(lat, lng) * DENSITY_FACTOR).min(MAX_PENALTY);
        (BASE_SCORE - penalty).clamp(40.0, 100.0)
    }
}

#[async_trait]
impl ScoreEstimator for TrafficEstimator {
    fn factor(&self) -> FactorKind {
        FactorKind::Traffic
    }

    fn fallback(&self) -> FallbackRange {
        FallbackRange::new(60, 30)
    }

    async fn measure(&self, location: &Coordinates) -> Result<f64> {
        Ok(Self::score_at(location.lat, location.lng))
    }
}
