//! Error types for safety-lens

use thiserror::Error;

/// Main error type for safety-lens operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("Weather lookup error: {0}")]
    Weather(String),

    #[error("Scoring error: {0}")]
    Scoring(String),

    #[error("Location not found: {0}")]
    NotFound(String),
}

/// Result type alias for safety-lens operations
pub type Result<T> = std::result::Result<T, Error>;
