//! JSON output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::{Assessment, OutputFormatter};

/// JSON formatter - outputs the full assessment as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON report"
    }

    fn format(&self, assessment: &Assessment, _config: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(assessment)?)
    }
}
