//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::error::Error;
use crate::format::{available_formats, FormatInfo};
use crate::geo::{describe_position, geocode_location, Coordinates};
use crate::safety::{generate_alerts, Alert, SafetyData};
use crate::server::state::AppState;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/safety", get(safety_by_name_handler).post(safety_handler))
        .route("/api/geocode", get(geocode_handler))
        .route("/api/alerts", get(alerts_handler))
        .route("/api/location", get(location_handler))
        .route("/api/formats", get(formats_handler))
        .route("/api/status", get(status_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl ApiError {
    fn not_found(what: &str) -> Self {
        ApiError {
            error: format!("Location not found: {}", what),
            code: "NOT_FOUND".to_string(),
            status: StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let (status, code) = match &err {
            Error::InvalidCoordinates(_) => (StatusCode::BAD_REQUEST, "INVALID_COORDINATES"),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Error::Geocoding(_) => (StatusCode::BAD_GATEWAY, "LOCATION_ERROR"),
            Error::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
            status,
        }
    }
}

/// Safety request body
#[derive(Debug, Deserialize)]
pub struct SafetyRequest {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
    /// Display name; reverse geocoded when absent
    pub name: Option<String>,
}

/// Safety report for explicit coordinates
///
/// POST /api/safety
async fn safety_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SafetyRequest>,
) -> Result<Json<SafetyData>, ApiError> {
    Coordinates::unnamed(req.lat, req.lng).validate()?;

    let location = match req.name {
        Some(name) if !name.trim().is_empty() => Coordinates::new(req.lat, req.lng, name),
        _ => describe_position(&state.geocoder, req.lat, req.lng).await,
    };

    Ok(Json(state.safety.fetch_safety_data(&location).await))
}

/// Query naming a place
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub location: String,
}

/// Safety report for a place name
///
/// GET /api/safety?location=<name>
async fn safety_by_name_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<SafetyData>, ApiError> {
    let location = geocode_location(&state.geocoder, &query.location)
        .await
        .ok_or_else(|| ApiError::not_found(&query.location))?;

    Ok(Json(state.safety.fetch_safety_data(&location).await))
}

/// Geocode query
#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    pub q: String,
}

/// Resolve a place name
///
/// GET /api/geocode?q=<name>
async fn geocode_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<Coordinates>, ApiError> {
    geocode_location(&state.geocoder, &query.q)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(&query.q))
}

/// Alert feed response
#[derive(Debug, Serialize, Deserialize)]
pub struct AlertsResponse {
    pub alerts: Vec<Alert>,
}

/// Synthetic alert feed for a place
///
/// GET /api/alerts?location=<name>
async fn alerts_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocationQuery>,
) -> Json<AlertsResponse> {
    Json(AlertsResponse {
        alerts: generate_alerts(&query.location, state.safety.rng()),
    })
}

/// Get current location from IP address
///
/// GET /api/location
async fn location_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Coordinates>, ApiError> {
    Ok(Json(state.locator.locate().await?))
}

/// Formats list response
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatsResponse {
    pub formats: Vec<FormatInfo>,
}

/// List available output formats
///
/// GET /api/formats
async fn formats_handler() -> Json<FormatsResponse> {
    Json(FormatsResponse {
        formats: available_formats(),
    })
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
