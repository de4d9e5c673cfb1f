//! URL output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::{Assessment, OutputFormatter};

/// URL formatter - outputs a map URL for the assessed location
pub struct UrlFormatter;

impl UrlFormatter {
    /// Format URL with optional provider override
    pub fn format_with_provider(
        &self,
        assessment: &Assessment,
        config: &Config,
        provider: Option<&str>,
    ) -> Result<String> {
        config.format_url(
            provider,
            assessment.coordinates.lat,
            assessment.coordinates.lng,
        )
    }
}

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Map URL for the location"
    }

    fn format(&self, assessment: &Assessment, config: &Config) -> Result<String> {
        self.format_with_provider(assessment, config, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fixtures::sample_assessment;

    #[test]
    fn test_url_format_default_provider() {
        let output = UrlFormatter
            .format(&sample_assessment(false), &Config::default())
            .unwrap();

        // Default provider is Google
        assert_eq!(output, "https://www.google.com/maps/@40.7128,-74.006,15z");
    }

    #[test]
    fn test_url_format_with_provider() {
        let output = UrlFormatter
            .format_with_provider(&sample_assessment(false), &Config::default(), Some("openstreetmap"))
            .unwrap();

        assert!(output.contains("openstreetmap.org"));
    }

    #[test]
    fn test_url_format_unknown_provider() {
        let result = UrlFormatter.format_with_provider(
            &sample_assessment(false),
            &Config::default(),
            Some("nowhere"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_url_formatter_info() {
        let formatter = UrlFormatter;
        assert_eq!(formatter.name(), "url");
        assert!(!formatter.description().is_empty());
    }
}
