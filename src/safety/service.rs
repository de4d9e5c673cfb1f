//! Safety-score aggregation
//!
//! Runs the five estimators concurrently, blends them into the composite
//! score, derives the trend and attaches fresh danger zones.

use crate::clock::Clock;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::geo::Coordinates;
use crate::random::RandomSource;
use crate::safety::estimator::Estimators;
use crate::safety::types::{clamp_score, FactorKind, SafetyData, SafetyFactor, Trend};
use crate::safety::zones::DangerZoneGenerator;
use std::sync::Arc;
use tracing::{debug, error};

/// Divisor applied to epoch milliseconds inside the trend oscillator
const TREND_PERIOD_DIVISOR: f64 = 100_000.0;

/// Unrounded scores of the five categories
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub crime: f64,
    pub traffic: f64,
    pub weather: f64,
    pub emergency: f64,
    pub lighting: f64,
}

impl SubScores {
    /// Score of one category
    pub fn get(&self, kind: FactorKind) -> f64 {
        match kind {
            FactorKind::Crime => self.crime,
            FactorKind::Traffic => self.traffic,
            FactorKind::Weather => self.weather,
            FactorKind::EmergencyResponse => self.emergency,
            FactorKind::StreetLighting => self.lighting,
        }
    }

    /// Weighted blend, before rounding
    pub fn weighted(&self) -> f64 {
        FactorKind::ALL
            .iter()
            .map(|kind| self.get(*kind) * f64::from(kind.weight_percent()))
            .sum::<f64>()
            / 100.0
    }

    /// Composite score in [0, 100]
    pub fn composite(&self) -> Result<u8> {
        let weighted = self.weighted();
        if !weighted.is_finite() {
            return Err(Error::Scoring(format!("non-finite composite score: {}", weighted)));
        }
        Ok(clamp_score(weighted))
    }

    /// The five report factors in fixed order
    pub fn factors(&self) -> Vec<SafetyFactor> {
        FactorKind::ALL
            .iter()
            .map(|kind| SafetyFactor::from_raw(*kind, self.get(*kind)))
            .collect()
    }
}

/// Oscillator behind the trend indicator, in [-1, 1]
pub fn trend_value(now_millis: i64, lat: f64, lng: f64) -> f64 {
    (now_millis as f64 / TREND_PERIOD_DIVISOR + lat + lng).sin()
}

/// Aggregates sub-scores into safety reports
pub struct SafetyService {
    estimators: Estimators,
    zones: DangerZoneGenerator,
    clock: Arc<dyn Clock>,
    rng: Arc<dyn RandomSource>,
}

impl SafetyService {
    /// Create a service from explicit collaborators
    pub fn new(estimators: Estimators, clock: Arc<dyn Clock>, rng: Arc<dyn RandomSource>) -> Self {
        Self {
            estimators,
            zones: DangerZoneGenerator::new(Arc::clone(&rng)),
            clock,
            rng,
        }
    }

    /// Create a service with the configured weather API
    pub fn from_config(
        config: &Config,
        clock: Arc<dyn Clock>,
        rng: Arc<dyn RandomSource>,
    ) -> Result<Self> {
        let estimators = Estimators::from_config(config, Arc::clone(&clock), Arc::clone(&rng))?;
        Ok(Self::new(estimators, clock, rng))
    }

    /// Random source shared with the estimators
    pub fn rng(&self) -> &dyn RandomSource {
        self.rng.as_ref()
    }

    /// Produce the safety report for a location
    ///
    /// Never fails: if the assessment cannot be completed the static
    /// fallback record is returned instead.
    pub async fn fetch_safety_data(&self, location: &Coordinates) -> SafetyData {
        match self.assess(location).await {
            Ok(data) => data,
            Err(e) => {
                error!(location = %location.name, error = %e, "error fetching safety data, using fallback record");
                SafetyData::fallback(location.name.clone())
            }
        }
    }

    /// Run all five estimators concurrently
    pub async fn sub_scores(&self, location: &Coordinates) -> SubScores {
        let rng = self.rng.as_ref();
        let est = &self.estimators;

        let (crime, traffic, weather, emergency, lighting) = tokio::join!(
            est.crime.estimate(location, rng),
            est.traffic.estimate(location, rng),
            est.weather.estimate(location, rng),
            est.emergency.estimate(location, rng),
            est.lighting.estimate(location, rng),
        );

        SubScores {
            crime,
            traffic,
            weather,
            emergency,
            lighting,
        }
    }

    /// Produce the safety report, surfacing aggregation failures
    pub async fn assess(&self, location: &Coordinates) -> Result<SafetyData> {
        location.ensure_finite()?;

        let scores = self.sub_scores(location).await;
        let score = scores.composite()?;
        let trend = Trend::from_value(trend_value(
            self.clock.now_millis(),
            location.lat,
            location.lng,
        ));
        debug!(location = %location.name, ?scores, score, %trend, "assessed location");

        Ok(SafetyData {
            location: location.name.clone(),
            score,
            trend,
            factors: scores.factors(),
            danger_zones: self.zones.generate(location),
        })
    }
}
