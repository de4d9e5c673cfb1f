//! Street-lighting placeholder model
//!
//! `80 - 20 * |lat - 40.7| - 15 * |lng + 74| + U(0, 20)`, clamped to [40, 100].

use crate::constants::reference;
use crate::error::Result;
use crate::geo::Coordinates;
use crate::random::RandomSource;
use crate::safety::estimator::{FallbackRange, ScoreEstimator};
use crate::safety::types::FactorKind;
use async_trait::async_trait;
use std::sync::Arc;

const BASE_SCORE: f64 = 80.0;
const LAT_PENALTY: f64 = 20.0;
const LNG_PENALTY: f64 = 15.0;
const JITTER: f64 = 20.0;

/// Street-lighting estimator
pub struct StreetLightingEstimator {
    rng: Arc<dyn RandomSource>,
}

impl StreetLightingEstimator {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Score for a position given a jitter draw in [0, 1)
    pub fn score_with(lat: f64, lng: f64, draw: f64) -> f64 {
        let development = BASE_SCORE
            - (lat - reference::LAT).abs() * LAT_PENALTY
            - (lng - reference::LNG).abs() * LNG_PENALTY;

        (development + draw * JITTER).clamp(40.0, 100.0)
    }
}

#[async_trait]
impl ScoreEstimator for StreetLightingEstimator {
    fn factor(&self) -> FactorKind {
        FactorKind::StreetLighting
    }

    fn fallback(&self) -> FallbackRange {
        FallbackRange::new(55, 35)
    }

    async fn measure(&self, location: &Coordinates) -> Result<f64> {
        Ok(Self::score_with(location.lat, location.lng, self.rng.float()))
    }
}
