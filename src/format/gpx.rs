//! GPX output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::{Assessment, OutputFormatter};
use crate::safety::SafetyStatus;

/// GPX formatter - outputs the location and its zones as waypoints
pub struct GpxFormatter;

/// Escape the five XML special characters
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl OutputFormatter for GpxFormatter {
    fn name(&self) -> &str {
        "gpx"
    }

    fn description(&self) -> &str {
        "GPX waypoint file"
    }

    fn format(&self, assessment: &Assessment, _config: &Config) -> Result<String> {
        let safety = &assessment.safety;
        let mut gpx = String::new();

        // XML header
        gpx.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        gpx.push('\n');
        gpx.push_str(r#"<gpx version="1.1" creator="safety-lens">"#);
        gpx.push('\n');

        gpx.push_str("  <metadata>\n");
        gpx.push_str(&format!(
            "    <name>Safety report for {}</name>\n",
            escape(&safety.location)
        ));
        gpx.push_str("  </metadata>\n");

        // Location waypoint
        gpx.push_str(&format!(
            r#"  <wpt lat="{}" lon="{}">"#,
            assessment.coordinates.lat, assessment.coordinates.lng
        ));
        gpx.push('\n');
        gpx.push_str(&format!("    <name>{}</name>\n", escape(&safety.location)));
        gpx.push_str(&format!(
            "    <desc>Safety score {} ({})</desc>\n",
            safety.score, safety.trend
        ));
        gpx.push_str("    <sym>flag</sym>\n");
        gpx.push_str("  </wpt>\n");

        for zone in &safety.danger_zones {
            gpx.push_str(&format!(r#"  <wpt lat="{}" lon="{}">"#, zone.lat, zone.lng));
            gpx.push('\n');
            gpx.push_str(&format!("    <name>{}</name>\n", escape(&zone.name)));
            gpx.push_str(&format!(
                "    <desc>{} {}: {}</desc>\n",
                zone.zone_type,
                zone.score,
                escape(&zone.reason)
            ));
            gpx.push_str(&format!("    <type>{}</type>\n", zone.zone_type));

            let symbol = match zone.zone_type {
                SafetyStatus::Safe => "safe",
                SafetyStatus::Warning => "caution",
                SafetyStatus::Danger => "danger",
            };
            gpx.push_str(&format!("    <sym>{}</sym>\n", symbol));
            gpx.push_str("  </wpt>\n");
        }

        gpx.push_str("</gpx>\n");
        Ok(gpx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fixtures::sample_assessment;

    #[test]
    fn test_gpx_format() {
        let output = GpxFormatter
            .format(&sample_assessment(false), &Config::default())
            .unwrap();

        assert!(output.contains(r#"<?xml version="1.0""#));
        assert!(output.contains(r#"<gpx version="1.1""#));
        assert!(output.contains(r#"<wpt lat="40.7128" lon="-74.006">"#));
        assert!(output.contains("<name>New York, NY Zone 1</name>"));
        assert!(output.contains("<sym>danger</sym>"));
        assert!(output.contains("</gpx>"));
        // location + two zones
        assert_eq!(output.matches("<wpt").count(), 3);
    }

    #[test]
    fn test_gpx_escapes_names() {
        let mut assessment = sample_assessment(false);
        assessment.safety.location = "Tom & Jerry's <Place>".to_string();

        let output = GpxFormatter.format(&assessment, &Config::default()).unwrap();
        assert!(output.contains("Tom &amp; Jerry&apos;s &lt;Place&gt;"));
    }

    #[test]
    fn test_gpx_formatter_info() {
        let formatter = GpxFormatter;
        assert_eq!(formatter.name(), "gpx");
        assert!(!formatter.description().is_empty());
    }
}
