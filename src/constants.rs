//! Centralized constants for the safety-lens crate

/// Reference point the placeholder formulas measure "urban density" from
pub mod reference {
    /// Latitude of the reference point (New York City)
    pub const LAT: f64 = 40.7;

    /// Longitude of the reference point (New York City)
    pub const LNG: f64 = -74.0;
}

/// External API endpoints
pub mod api {
    /// Mapbox geocoding API
    pub const MAPBOX_URL: &str = "https://api.mapbox.com";

    /// OpenWeatherMap API
    pub const OPENWEATHER_URL: &str = "https://api.openweathermap.org";

    /// IP geolocation API (free, no key required)
    pub const IP_API_URL: &str = "http://ip-api.com/json";
}

/// Cache settings
pub mod cache {
    /// IP location cache duration in seconds (1 hour)
    pub const IP_LOCATION_TTL_SECS: u64 = 3600;

    /// IP location cache file name
    pub const IP_LOCATION_CACHE_FILE: &str = "ip_location_cache.json";
}
