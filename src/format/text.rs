//! Human-readable text output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::{Assessment, OutputFormatter};
use crate::safety::Trend;

const GAUGE_WIDTH: usize = 20;

/// Text formatter - outputs human-readable summary
pub struct TextFormatter;

/// Fixed-width bar for a 0..=100 score
fn gauge(score: u8) -> String {
    let filled = usize::from(score.min(100)) * GAUGE_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(GAUGE_WIDTH - filled))
}

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "^",
        Trend::Down => "v",
        Trend::Stable => "=",
    }
}

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, assessment: &Assessment, _config: &Config) -> Result<String> {
        let safety = &assessment.safety;
        let mut output = String::new();

        // Header
        output.push_str(&format!("Safety report for {}\n", safety.location));
        output.push_str(&format!(
            "Position: ({:.6}, {:.6})\n",
            assessment.coordinates.lat, assessment.coordinates.lng
        ));
        output.push_str(&format!(
            "Score: {:>3} {} trend {} {}\n\n",
            safety.score,
            gauge(safety.score),
            trend_arrow(safety.trend),
            safety.trend
        ));

        output.push_str("Factors:\n");
        for factor in &safety.factors {
            output.push_str(&format!(
                "  {:<20} {:>3} {} {}\n",
                factor.name,
                factor.score,
                gauge(factor.score),
                factor.status
            ));
        }

        if !safety.danger_zones.is_empty() {
            output.push_str("\nZones:\n");
            for zone in &safety.danger_zones {
                output.push_str(&format!(
                    "  {} ({:.6}, {:.6}) {:>3} {} - {}\n",
                    zone.name, zone.lat, zone.lng, zone.score, zone.zone_type, zone.reason
                ));
            }
        }

        if let Some(alerts) = &assessment.alerts {
            output.push_str("\nAlerts:\n");
            for alert in alerts {
                output.push_str(&format!(
                    "  [{}] {} ({}, {}): {}\n",
                    alert.severity, alert.title, alert.category, alert.timestamp, alert.description
                ));
            }
        }

        Ok(output)
    }
}
