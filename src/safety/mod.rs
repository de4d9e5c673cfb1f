//! Safety scoring
//!
//! This module handles:
//! - Scoring the five categories (`estimator`)
//! - Blending them into a composite report (`service`)
//! - Placing danger-zone markers (`zones`)
//! - The synthetic alert feed (`alerts`)

pub mod alerts;
pub mod estimator;
pub mod service;
pub mod types;
pub mod zones;

pub use alerts::{generate_alerts, Alert};
pub use estimator::{Estimators, ScoreEstimator};
pub use service::{SafetyService, SubScores};
pub use types::{DangerZone, FactorKind, SafetyData, SafetyFactor, SafetyStatus, Trend};
