//! Emergency-response placeholder model: `100 - 10 * d`, clamped to [50, 100]

use crate::error::Result;
use crate::geo::Coordinates;
use crate::safety::estimator::{urban_distance, FallbackRange, ScoreEstimator};
use crate::safety::types::FactorKind;
use async_trait::async_trait;

/// Emergency-response estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct EmergencyResponseEstimator;

impl EmergencyResponseEstimator {
    pub fn score_at(lat: f64, lng: f64) -> f64 {
        (100.0 - urban_distance(lat, lng) * 10.0).clamp(50.0, 100.0)
    }
}

#[async_trait]
impl ScoreEstimator for EmergencyResponseEstimator {
    fn factor(&self) -> FactorKind {
        FactorKind::EmergencyResponse
    }

    fn fallback(&self) -> FallbackRange {
        FallbackRange::new(65, 30)
    }

    async fn measure(&self, location: &Coordinates) -> Result<f64> {
        Ok(Self::score_at(location.lat, location.lng))
    }
}
