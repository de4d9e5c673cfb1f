//! Synthetic alert feed
//!
//! Produces 2 to 4 mock alerts for a location from fixed per-category tables.
//! Titles and descriptions are paired by index.

use crate::random::RandomSource;
use serde::{Deserialize, Serialize};

const MIN_ALERTS: usize = 2;
const MAX_ALERTS: usize = 4;

const TIMESTAMPS: [&str; 5] = [
    "2 min ago",
    "15 min ago",
    "45 min ago",
    "1 hour ago",
    "2 hours ago",
];

/// Alert category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertCategory {
    Weather,
    Crime,
    Construction,
    Traffic,
}

impl AlertCategory {
    pub const ALL: [AlertCategory; 4] = [
        Self::Weather,
        Self::Crime,
        Self::Construction,
        Self::Traffic,
    ];

    fn titles(&self) -> [&'static str; 4] {
        match self {
            Self::Weather => [
                "Severe Weather Warning",
                "Storm Alert",
                "Heavy Rain Advisory",
                "Wind Warning",
            ],
            Self::Crime => [
                "Increased Police Activity",
                "Security Alert",
                "Police Investigation",
                "Safety Advisory",
            ],
            Self::Construction => [
                "Road Construction",
                "Utility Work",
                "Street Maintenance",
                "Infrastructure Update",
            ],
            Self::Traffic => [
                "Traffic Incident",
                "Road Closure",
                "Heavy Traffic",
                "Accident Report",
            ],
        }
    }

    fn descriptions(&self) -> [&'static str; 4] {
        match self {
            Self::Weather => [
                "Heavy rain and flooding expected in area",
                "Thunderstorms approaching the region",
                "Potential flooding in low-lying areas",
                "Strong winds up to 45 mph expected",
            ],
            Self::Crime => [
                "Multiple police units responding to incident",
                "Ongoing investigation in the area",
                "Police presence increased for safety",
                "Residents advised to stay vigilant",
            ],
            Self::Construction => [
                "Lane closures expected until 6 PM",
                "Water main repair work in progress",
                "Scheduled road maintenance",
                "Sidewalk construction ongoing",
            ],
            Self::Traffic => [
                "Multi-vehicle accident reported",
                "Main road temporarily closed",
                "Unusually heavy traffic in area",
                "Vehicle breakdown causing delays",
            ],
        }
    }
}

impl std::fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weather => write!(f, "weather"),
            Self::Crime => write!(f, "crime"),
            Self::Construction => write!(f, "construction"),
            Self::Traffic => write!(f, "traffic"),
        }
    }
}

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Self::Low, Self::Medium, Self::High];
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// One entry of the alert feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub category: AlertCategory,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub location: String,
    pub timestamp: String,
}

/// Pick one element uniformly
fn pick<T: Copy>(rng: &dyn RandomSource, items: &[T]) -> Option<T> {
    items.get(rng.below(items.len())).copied()
}

/// Generate a fresh alert feed for `location`
pub fn generate_alerts(location: &str, rng: &dyn RandomSource) -> Vec<Alert> {
    let count = MIN_ALERTS + rng.below(MAX_ALERTS - MIN_ALERTS + 1);

    (0..count)
        .filter_map(|i| {
            let category = pick(rng, &AlertCategory::ALL)?;
            let index = rng.below(4);
            let severity = pick(rng, &Severity::ALL)?;
            let timestamp = pick(rng, &TIMESTAMPS)?;

            Some(Alert {
                id: (i + 1).to_string(),
                category,
                severity,
                title: category.titles().get(index)?.to_string(),
                description: category.descriptions().get(index)?.to_string(),
                location: location.to_string(),
                timestamp: timestamp.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::pseudo::{ConstantRandom, SeededRandom};

    #[test]
    fn test_alert_count_in_range() {
        let rng = SeededRandom::new(31);
        for _ in 0..200 {
            let alerts = generate_alerts("Boston", &rng);
            assert!((MIN_ALERTS..=MAX_ALERTS).contains(&alerts.len()));
        }
    }

    #[test]
    fn test_ids_and_location() {
        let alerts = generate_alerts("Boston", &SeededRandom::new(4));
        for (i, alert) in alerts.iter().enumerate() {
            assert_eq!(alert.id, (i + 1).to_string());
            assert_eq!(alert.location, "Boston");
            assert!(TIMESTAMPS.contains(&alert.timestamp.as_str()));
        }
    }

    #[test]
    fn test_title_matches_description() {
        let rng = SeededRandom::new(8);
        for _ in 0..100 {
            for alert in generate_alerts("Boston", &rng) {
                let titles = alert.category.titles();
                let index = titles.iter().position(|t| *t == alert.title).unwrap();
                assert_eq!(alert.description, alert.category.descriptions()[index]);
            }
        }
    }

    #[test]
    fn test_constant_draw() {
        let alerts = generate_alerts("Here", &ConstantRandom::new(0.0));
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].category, AlertCategory::Weather);
        assert_eq!(alerts[0].severity, Severity::Low);
        assert_eq!(alerts[0].title, "Severe Weather Warning");
        assert_eq!(alerts[0].timestamp, "2 min ago");
    }

    #[test]
    fn test_json_shape() {
        let alerts = generate_alerts("Here", &ConstantRandom::new(0.0));
        let json = serde_json::to_value(&alerts[0]).unwrap();
        assert_eq!(json["type"], "weather");
        assert_eq!(json["severity"], "low");
    }
}
