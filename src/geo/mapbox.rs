//! Mapbox geocoding backend
//!
//! Uses the Mapbox places API (v5) for forward and reverse lookups. Only the
//! best match is requested (`limit=1`).

use crate::config::Config;
use crate::error::{Error, Result};
use crate::geo::{Coordinates, GeoBackend};
use serde::Deserialize;
use tracing::debug;

const USER_AGENT: &str = concat!("safety-lens/", env!("CARGO_PKG_VERSION"));

/// Mapbox geocoding backend
#[derive(Debug, Clone)]
pub struct MapboxGeocoder {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

/// Places API response
#[derive(Debug, Deserialize)]
struct PlacesResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

/// A single place match; `center` is `[lng, lat]`
#[derive(Debug, Deserialize)]
struct Feature {
    center: [f64; 2],
    place_name: String,
}

impl MapboxGeocoder {
    /// Create a new Mapbox backend against `base_url`
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }

    /// Create a backend from the configured endpoint and access token
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.endpoints.geocoding, &config.api_keys.mapbox)
    }

    fn places_url(&self, search: &str) -> String {
        format!(
            "{}/geocoding/v5/mapbox.places/{}.json",
            self.base_url, search
        )
    }

    /// Fetch a places URL and return its first feature
    async fn first_feature(&self, url: &str) -> Result<Option<Coordinates>> {
        if self.access_token.is_empty() {
            return Err(Error::Config(
                "Mapbox access token not configured (api_keys.mapbox)".to_string(),
            ));
        }

        let response = self
            .client
            .get(url)
            .query(&[("access_token", self.access_token.as_str()), ("limit", "1")])
            .send()
            .await
            .map_err(|e| Error::Geocoding(format!("Mapbox request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Geocoding(format!(
                "Mapbox returned status: {}",
                response.status()
            )));
        }

        let places: PlacesResponse = response
            .json()
            .await
            .map_err(|e| Error::Geocoding(format!("Failed to parse Mapbox response: {}", e)))?;

        Ok(places.features.into_iter().next().map(|feature| {
            let [lng, lat] = feature.center;
            Coordinates::new(lat, lng, feature.place_name)
        }))
    }
}

impl GeoBackend for MapboxGeocoder {
    async fn geocode(&self, query: &str) -> Result<Option<Coordinates>> {
        let url = self.places_url(&urlencoding::encode(query));
        debug!(%query, "mapbox forward geocode");
        self.first_feature(&url).await
    }

    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<Option<Coordinates>> {
        let url = self.places_url(&format!("{},{}", lng, lat));
        debug!(lat, lng, "mapbox reverse geocode");
        self.first_feature(&url).await
    }
}
