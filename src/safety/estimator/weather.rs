//! Weather-conditions estimator
//!
//! Looks up current conditions from an OpenWeatherMap-compatible API and
//! scores them: start at 85, -15 for storms or rain, -20 for snow or fog,
//! -10 for temperatures outside [0, 35] °C, clamped to [50, 100].
//!
//! Any lookup failure (network, non-2xx, bad body, no API key) falls back to
//! a random score in [70, 100). No timeout beyond reqwest's defaults and no
//! retries.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::geo::Coordinates;
use crate::safety::estimator::{FallbackRange, ScoreEstimator};
use crate::safety::types::FactorKind;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

const BASE_SCORE: f64 = 85.0;
const PRECIPITATION_PENALTY: f64 = 15.0;
const VISIBILITY_PENALTY: f64 = 20.0;
const TEMPERATURE_PENALTY: f64 = 10.0;
/// Assumed when the response carries no temperature
const DEFAULT_TEMP_CELSIUS: f64 = 20.0;

/// Current-conditions response (only the fields we score)
#[derive(Debug, Deserialize)]
struct CurrentWeather {
    weather: Vec<Condition>,
    main: Option<Readings>,
}

#[derive(Debug, Deserialize)]
struct Condition {
    main: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Readings {
    temp: Option<f64>,
}

/// Weather estimator backed by a live API
#[derive(Debug, Clone)]
pub struct WeatherEstimator {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherEstimator {
    /// Create an estimator against `base_url`
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Create an estimator from the configured endpoint and API key
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.endpoints.weather, &config.api_keys.openweather)
    }

    /// Score a condition string and temperature
    pub fn score_conditions(condition: Option<&str>, temp_celsius: Option<f64>) -> f64 {
        let condition = condition.map(str::to_lowercase).unwrap_or_default();
        let temp = temp_celsius.unwrap_or(DEFAULT_TEMP_CELSIUS);

        let mut score = BASE_SCORE;
        if condition.contains("storm") || condition.contains("rain") {
            score -= PRECIPITATION_PENALTY;
        }
        if condition.contains("snow") || condition.contains("fog") {
            score -= VISIBILITY_PENALTY;
        }
        if !(0.0..=35.0).contains(&temp) {
            score -= TEMPERATURE_PENALTY;
        }

        score.clamp(50.0, 100.0)
    }

    async fn fetch(&self, lat: f64, lng: f64) -> Result<CurrentWeather> {
        if self.api_key.is_empty() {
            return Err(Error::Config(
                "OpenWeatherMap API key not configured (api_keys.openweather)".to_string(),
            ));
        }

        let url = format!("{}/data/2.5/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lng.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .map_err(|e| Error::Weather(format!("Weather request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Weather(format!(
                "Weather API returned status: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Weather(format!("Failed to parse weather response: {}", e)))
    }
}

#[async_trait]
impl ScoreEstimator for WeatherEstimator {
    fn factor(&self) -> FactorKind {
        FactorKind::Weather
    }

    fn fallback(&self) -> FallbackRange {
        FallbackRange::new(70, 30)
    }

    async fn measure(&self, location: &Coordinates) -> Result<f64> {
        let current = self.fetch(location.lat, location.lng).await?;

        let condition = current.weather.first().and_then(|c| c.main.as_deref());
        let temp = current.main.and_then(|m| m.temp);
        debug!(?condition, ?temp, "current weather");

        Ok(Self::score_conditions(condition, temp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::pseudo::SeededRandom;
    use crate::test_support::spawn_stub;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::collections::HashMap;

    #[test]
    fn test_score_conditions() {
        assert_eq!(WeatherEstimator::score_conditions(Some("Clear"), Some(20.0)), 85.0);
        assert_eq!(WeatherEstimator::score_conditions(Some("Rain"), Some(20.0)), 70.0);
        assert_eq!(WeatherEstimator::score_conditions(Some("Thunderstorm"), Some(20.0)), 70.0);
        assert_eq!(WeatherEstimator::score_conditions(Some("Fog"), Some(20.0)), 65.0);
        assert_eq!(WeatherEstimator::score_conditions(Some("Snow"), Some(-5.0)), 55.0);
        assert_eq!(WeatherEstimator::score_conditions(Some("Clear"), Some(36.0)), 75.0);
        assert_eq!(WeatherEstimator::score_conditions(None, None), 85.0);
    }

    #[test]
    fn test_temperature_bounds_inclusive() {
        assert_eq!(WeatherEstimator::score_conditions(Some("Clear"), Some(0.0)), 85.0);
        assert_eq!(WeatherEstimator::score_conditions(Some("Clear"), Some(35.0)), 85.0);
        assert_eq!(WeatherEstimator::score_conditions(Some("Clear"), Some(-0.1)), 75.0);
    }

    async fn weather_handler(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
        assert_eq!(params.get("units").map(String::as_str), Some("metric"));
        assert_eq!(params.get("appid").map(String::as_str), Some("owm-test"));

        let body = match params.get("lat").map(String::as_str) {
            Some("1") => serde_json::json!({ "weather": [{ "main": "Rain" }], "main": { "temp": 12.5 } }),
            Some("2") => serde_json::json!({ "weather": [{ "main": "Snow" }], "main": { "temp": -3.0 } }),
            Some("4") => serde_json::json!({ "cod": 200 }),
            _ => serde_json::json!({ "weather": [], "main": {} }),
        };
        Json(body)
    }

    #[tokio::test]
    async fn test_measure_from_stub() {
        let router = Router::new().route("/data/2.5/weather", get(weather_handler));
        let base = spawn_stub(router).await;
        let estimator = WeatherEstimator::new(base, "owm-test").unwrap();

        let rainy = estimator.measure(&Coordinates::new(1.0, 0.0, "a")).await.unwrap();
        assert_eq!(rainy, 70.0);

        let frozen = estimator.measure(&Coordinates::new(2.0, 0.0, "b")).await.unwrap();
        assert_eq!(frozen, 55.0);

        let unknown = estimator.measure(&Coordinates::new(3.0, 0.0, "c")).await.unwrap();
        assert_eq!(unknown, 85.0);
    }

    #[tokio::test]
    async fn test_body_without_conditions_falls_back() {
        let router = Router::new().route("/data/2.5/weather", get(weather_handler));
        let base = spawn_stub(router).await;
        let estimator = WeatherEstimator::new(base, "owm-test").unwrap();
        let here = Coordinates::new(4.0, 0.0, "d");

        assert!(matches!(estimator.measure(&here).await, Err(Error::Weather(_))));

        let rng = SeededRandom::new(9);
        for _ in 0..20 {
            let score = estimator.estimate(&here, &rng).await;
            assert!(estimator.fallback().contains(score), "{} out of range", score);
        }
    }

    #[tokio::test]
    async fn test_server_error_falls_back() {
        let router = Router::new().route(
            "/data/2.5/weather",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = spawn_stub(router).await;
        let estimator = WeatherEstimator::new(base, "owm-test").unwrap();
        let here = Coordinates::new(40.7128, -74.006, "New York, NY");

        assert!(estimator.measure(&here).await.is_err());

        let rng = SeededRandom::new(5);
        for _ in 0..20 {
            let score = estimator.estimate(&here, &rng).await;
            assert!((70.0..=100.0).contains(&score), "{} out of range", score);
        }
    }

    #[tokio::test]
    async fn test_missing_key_falls_back() {
        let estimator = WeatherEstimator::new("http://127.0.0.1:9", "").unwrap();
        let here = Coordinates::new(40.7128, -74.006, "New York, NY");

        assert!(matches!(estimator.measure(&here).await, Err(Error::Config(_))));

        let score = estimator.estimate(&here, &SeededRandom::new(1)).await;
        assert!(estimator.fallback().contains(score));
    }

    #[tokio::test]
    async fn test_unreachable_host_falls_back() {
        // Port 9 (discard) is not expected to be listening locally
        let estimator = WeatherEstimator::new("http://127.0.0.1:9", "owm-test").unwrap();
        let here = Coordinates::new(0.0, 0.0, "Null Island");

        let score = estimator.estimate(&here, &SeededRandom::new(2)).await;
        assert!((70.0..=100.0).contains(&score));
    }
}
