//! Sub-score estimators
//!
//! Each safety category is scored by its own `ScoreEstimator`. The current
//! implementations are placeholder models (plus one live weather lookup);
//! a real data source replaces one by implementing the trait and plugging it
//! into [`Estimators`].
//!
//! ## Failure policy
//! `measure` may fail. `estimate` never does: it logs the failure and draws a
//! replacement from the estimator's [`FallbackRange`].

pub mod crime;
pub mod emergency;
pub mod lighting;
pub mod traffic;
pub mod weather;

use crate::clock::Clock;
use crate::config::Config;
use crate::constants::reference;
use crate::error::Result;
use crate::geo::Coordinates;
use crate::random::RandomSource;
use crate::safety::types::FactorKind;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Range of the integer scores substituted when an estimator fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackRange {
    /// Smallest substituted score
    pub min: u32,
    /// Number of possible values, so scores fall in `[min, min + span)`
    pub span: u32,
}

impl FallbackRange {
    /// Create a range of `span` integer scores starting at `min`
    pub const fn new(min: u32, span: u32) -> Self {
        Self { min, span }
    }

    /// Draw a fallback score
    pub fn draw(&self, rng: &dyn RandomSource) -> f64 {
        f64::from(rng.int_in(self.min, self.span))
    }

    /// Whether `score` could have come from this range
    pub fn contains(&self, score: f64) -> bool {
        score >= f64::from(self.min) && score < f64::from(self.min + self.span)
    }
}

/// Strategy that scores one safety category for a location
#[async_trait]
pub trait ScoreEstimator: Send + Sync {
    /// Category this estimator scores
    fn factor(&self) -> FactorKind;

    /// Scores substituted when `measure` fails
    fn fallback(&self) -> FallbackRange;

    /// Compute the raw score, which may fail
    async fn measure(&self, location: &Coordinates) -> Result<f64>;

    /// Compute the score, substituting a fallback on any failure
    async fn estimate(&self, location: &Coordinates, rng: &dyn RandomSource) -> f64 {
        match self.measure(location).await {
            Ok(score) if score.is_finite() => score,
            Ok(score) => {
                warn!(factor = %self.factor(), score, "non-finite score, using fallback data");
                self.fallback().draw(rng)
            }
            Err(e) => {
                warn!(factor = %self.factor(), error = %e, "data source unavailable, using fallback data");
                self.fallback().draw(rng)
            }
        }
    }
}

/// The five estimators the aggregator runs, one per category
pub struct Estimators {
    pub crime: Box<dyn ScoreEstimator>,
    pub traffic: Box<dyn ScoreEstimator>,
    pub weather: Box<dyn ScoreEstimator>,
    pub emergency: Box<dyn ScoreEstimator>,
    pub lighting: Box<dyn ScoreEstimator>,
}

impl Estimators {
    /// Placeholder models with the given weather source
    pub fn with_weather(
        weather: Box<dyn ScoreEstimator>,
        clock: Arc<dyn Clock>,
        rng: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            crime: Box::new(crime::CrimeEstimator::new(clock)),
            traffic: Box::new(traffic::TrafficEstimator),
            weather,
            emergency: Box::new(emergency::EmergencyResponseEstimator),
            lighting: Box::new(lighting::StreetLightingEstimator::new(rng)),
        }
    }

    /// Placeholder models plus the configured weather API
    pub fn from_config(
        config: &Config,
        clock: Arc<dyn Clock>,
        rng: Arc<dyn RandomSource>,
    ) -> Result<Self> {
        let weather = weather::WeatherEstimator::from_config(config)?;
        Ok(Self::with_weather(Box::new(weather), clock, rng))
    }
}

/// Manhattan-style distance in degrees from the reference city
pub fn urban_distance(lat: f64, lng: f64) -> f64 {
    (lat - reference::LAT).abs() + (lng - reference::LNG).abs()
}
