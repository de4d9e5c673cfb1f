//! Geocoding module
//!
//! Provides geocoding (place name to coordinates), reverse geocoding and IP
//! geolocation.

pub mod ip_location;
pub mod mapbox;

use crate::config::Config;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// A resolved place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
    /// Display name (address or description)
    pub name: String,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64, name: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            name: name.into(),
        }
    }

    /// Coordinates without a known place name
    ///
    /// The name is derived from the position, e.g. `Location (40.7128, -74.0060)`.
    pub fn unnamed(lat: f64, lng: f64) -> Self {
        Self::new(lat, lng, format!("Location ({:.4}, {:.4})", lat, lng))
    }

    /// Reject NaN or infinite coordinates
    pub fn ensure_finite(&self) -> Result<()> {
        if self.lat.is_finite() && self.lng.is_finite() {
            Ok(())
        } else {
            Err(Error::InvalidCoordinates(format!(
                "non-finite position ({}, {})",
                self.lat, self.lng
            )))
        }
    }

    /// Validate that coordinates are finite and within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

/// Trait for geocoding backends
pub trait GeoBackend: Send + Sync {
    /// Geocode a place name to coordinates
    ///
    /// Returns the best match for the query, or None if not found
    fn geocode(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Option<Coordinates>>> + Send;

    /// Reverse geocode coordinates to a place name
    fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
    ) -> impl std::future::Future<Output = Result<Option<Coordinates>>> + Send;
}

/// Resolve a place name, swallowing every failure
///
/// Returns `None` when nothing matches or the lookup fails; failures are
/// logged.
pub async fn geocode_location<G: GeoBackend>(geocoder: &G, name: &str) -> Option<Coordinates> {
    match geocoder.geocode(name).await {
        Ok(Some(coords)) => {
            debug!(query = name, resolved = %coords.name, "geocoded location");
            Some(coords)
        }
        Ok(None) => {
            debug!(query = name, "no geocoding match");
            None
        }
        Err(e) => {
            error!(query = name, error = %e, "geocoding failed");
            None
        }
    }
}

/// Name a raw position, falling back to a coordinate label
pub async fn describe_position<G: GeoBackend>(geocoder: &G, lat: f64, lng: f64) -> Coordinates {
    match geocoder.reverse_geocode(lat, lng).await {
        Ok(Some(place)) => Coordinates::new(lat, lng, place.name),
        Ok(None) => Coordinates::unnamed(lat, lng),
        Err(e) => {
            debug!(error = %e, "reverse geocoding failed");
            Coordinates::unnamed(lat, lng)
        }
    }
}

/// Get the configured geocoding backend
pub fn get_geocoder(config: &Config) -> Result<mapbox::MapboxGeocoder> {
    mapbox::MapboxGeocoder::from_config(config)
}

/// Get the IP location service
pub fn get_ip_locator(config: &Config) -> Result<ip_location::IpLocator> {
    ip_location::IpLocator::new(&config.endpoints.ip_location)
}
