//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::api;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7878;

/// Default URL provider
pub const DEFAULT_URL_PROVIDER: &str = "google";

/// Default geocoding endpoint
pub const DEFAULT_GEOCODING_URL: &str = api::MAPBOX_URL;

/// Default weather endpoint
pub const DEFAULT_WEATHER_URL: &str = api::OPENWEATHER_URL;

/// Default IP location endpoint
pub const DEFAULT_IP_LOCATION_URL: &str = api::IP_API_URL;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "safety-lens";
