//! IP-based geolocation
//!
//! Stands in for device geolocation: resolves the caller's approximate
//! position through ip-api.com, with file-based caching.

use crate::config::defaults::APP_DIR_NAME;
use crate::constants::cache::{IP_LOCATION_CACHE_FILE, IP_LOCATION_TTL_SECS};
use crate::error::{Error, Result};
use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Label used when the lookup returns no place fields
pub const CURRENT_LOCATION_NAME: &str = "Your Location";

/// IP location service with caching
#[derive(Debug)]
pub struct IpLocator {
    client: reqwest::Client,
    url: String,
    cache_path: Option<PathBuf>,
}

/// ip-api.com response
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    country: Option<String>,
}

/// Cached location data
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedLocation {
    location: Coordinates,
    timestamp: i64,
}

impl IpLocator {
    /// Create an IP locator with the default cache path
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let cache_path = dirs::cache_dir().map(|p| p.join(APP_DIR_NAME).join(IP_LOCATION_CACHE_FILE));
        Self::build(url.into(), cache_path)
    }

    /// Create an IP locator with a specific cache path
    pub fn with_cache_path(url: impl Into<String>, cache_path: PathBuf) -> Result<Self> {
        Self::build(url.into(), Some(cache_path))
    }

    /// Create an IP locator without caching
    pub fn without_cache(url: impl Into<String>) -> Result<Self> {
        Self::build(url.into(), None)
    }

    fn build(url: String, cache_path: Option<PathBuf>) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            url,
            cache_path,
        })
    }

    /// Get current position based on IP address
    pub async fn locate(&self) -> Result<Coordinates> {
        if let Some(cached) = self.load_cache() {
            debug!(name = %cached.name, "using cached IP location");
            return Ok(cached);
        }

        let location = self.fetch_location().await?;
        self.save_cache(&location);

        Ok(location)
    }

    /// Fetch position from ip-api.com
    async fn fetch_location(&self) -> Result<Coordinates> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::Geocoding(format!("IP location request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Geocoding(format!(
                "IP location API returned status: {}",
                response.status()
            )));
        }

        let data: IpApiResponse = response
            .json()
            .await
            .map_err(|e| Error::Geocoding(format!("Failed to parse IP location response: {}", e)))?;

        Self::into_coordinates(data)
    }

    fn into_coordinates(data: IpApiResponse) -> Result<Coordinates> {
        if data.status != "success" {
            return Err(Error::Geocoding("IP location lookup failed".to_string()));
        }

        let lat = data
            .lat
            .ok_or_else(|| Error::Geocoding("No latitude in response".to_string()))?;
        let lng = data
            .lon
            .ok_or_else(|| Error::Geocoding("No longitude in response".to_string()))?;

        let name = [data.city, data.region_name, data.country]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(Coordinates::new(
            lat,
            lng,
            if name.is_empty() {
                CURRENT_LOCATION_NAME.to_string()
            } else {
                name
            },
        ))
    }

    /// Load cached location if still fresh
    fn load_cache(&self) -> Option<Coordinates> {
        let cache_path = self.cache_path.as_ref()?;
        let content = fs::read_to_string(cache_path).ok()?;
        let cached: CachedLocation = serde_json::from_str(&content).ok()?;

        let age = chrono::Utc::now().timestamp() - cached.timestamp;
        if (0..IP_LOCATION_TTL_SECS as i64).contains(&age) {
            Some(cached.location)
        } else {
            None
        }
    }

    /// Save location to cache; cache write failures are ignored
    fn save_cache(&self, location: &Coordinates) {
        let Some(cache_path) = &self.cache_path else {
            return;
        };

        if let Some(parent) = cache_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        let cached = CachedLocation {
            location: location.clone(),
            timestamp: chrono::Utc::now().timestamp(),
        };

        if let Ok(content) = serde_json::to_string_pretty(&cached) {
            let _ = fs::write(cache_path, content);
        }
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        if let Some(cache_path) = &self.cache_path {
            let _ = fs::remove_file(cache_path);
        }
    }

    /// Get cache duration
    pub fn cache_duration() -> Duration {
        Duration::from_secs(IP_LOCATION_TTL_SECS)
    }
}
