//! safety-lens: location safety scores
//!
//! A library and CLI tool that rates how safe a place is from five category
//! estimates, blends them into a composite score with a trend indicator and
//! scatters danger-zone markers around the location.
//!
//! ## Features
//!
//! - Crime, traffic, weather, emergency-response and street-lighting scores
//! - Weighted composite score with per-factor status
//! - Mapbox geocoding, reverse geocoding and IP-based current position
//! - Synthetic alert feed
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use safety_lens::clock::SystemClock;
//! use safety_lens::random::get_source;
//! use safety_lens::{Config, Coordinates, SafetyService};
//! use std::sync::Arc;
//!
//! # async fn demo() -> safety_lens::Result<()> {
//! let config = Config::default();
//! let service = SafetyService::from_config(&config, Arc::new(SystemClock), get_source(None))?;
//!
//! let place = Coordinates::new(40.7128, -74.0060, "New York, NY");
//! let report = service.fetch_safety_data(&place).await;
//! println!("{}: {} ({})", report.location, report.score, report.trend);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod geo;
pub mod random;
pub mod safety;
pub mod server;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::Coordinates;
pub use safety::{DangerZone, SafetyData, SafetyFactor, SafetyService, SafetyStatus, Trend};
