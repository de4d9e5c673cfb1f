//! Server shared state
//!
//! Holds the long-lived services behind the HTTP API.

use crate::clock::SystemClock;
use crate::config::Config;
use crate::error::Result;
use crate::geo::ip_location::IpLocator;
use crate::geo::mapbox::MapboxGeocoder;
use crate::geo::{get_geocoder, get_ip_locator};
use crate::random::get_source;
use crate::safety::SafetyService;
use std::sync::Arc;

/// Shared state for the HTTP server
pub struct AppState {
    /// Safety-score aggregator
    pub safety: SafetyService,

    /// Place-name lookups
    pub geocoder: MapboxGeocoder,

    /// Current-position lookups
    pub locator: IpLocator,
}

impl AppState {
    /// Create application state from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let safety = SafetyService::from_config(config, Arc::new(SystemClock), get_source(None))?;
        let geocoder = get_geocoder(config)?;
        let locator = get_ip_locator(config)?;

        Ok(Self::from_parts(safety, geocoder, locator))
    }

    /// Assemble state from already-built services
    pub fn from_parts(
        safety: SafetyService,
        geocoder: MapboxGeocoder,
        locator: IpLocator,
    ) -> Self {
        Self {
            safety,
            geocoder,
            locator,
        }
    }
}
