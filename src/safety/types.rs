//! Safety result records
//!
//! These are the records handed to the presentation layer. All of them are
//! built fresh for each query.

use serde::{Deserialize, Serialize};

/// Lowest score a factor can have and still be `safe`
pub const FACTOR_SAFE_MIN: u8 = 70;
/// Lowest score a factor can have and still be `warning`
pub const FACTOR_WARNING_MIN: u8 = 40;

/// Lowest score a danger zone can have and still be `safe`
pub const ZONE_SAFE_MIN: u8 = 75;
/// Lowest score a danger zone can have and still be `warning`
pub const ZONE_WARNING_MIN: u8 = 50;

/// Safety band of a factor or a danger zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyStatus {
    Safe,
    Warning,
    Danger,
}

impl SafetyStatus {
    /// Band of a category factor (70/40 thresholds)
    pub fn for_factor(score: u8) -> Self {
        Self::classify(score, FACTOR_SAFE_MIN, FACTOR_WARNING_MIN)
    }

    /// Band of a danger zone (75/50 thresholds)
    pub fn for_zone(score: u8) -> Self {
        Self::classify(score, ZONE_SAFE_MIN, ZONE_WARNING_MIN)
    }

    fn classify(score: u8, safe_min: u8, warning_min: u8) -> Self {
        if score >= safe_min {
            Self::Safe
        } else if score >= warning_min {
            Self::Warning
        } else {
            Self::Danger
        }
    }
}

impl std::fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Safe => write!(f, "safe"),
            Self::Warning => write!(f, "warning"),
            Self::Danger => write!(f, "danger"),
        }
    }
}

/// Direction the composite score is drifting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Map an oscillator value in [-1, 1] to a trend (±0.3 dead band)
    pub fn from_value(value: f64) -> Self {
        if value > 0.3 {
            Self::Up
        } else if value < -0.3 {
            Self::Down
        } else {
            Self::Stable
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

/// The five scored categories, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorKind {
    Crime,
    Traffic,
    Weather,
    EmergencyResponse,
    StreetLighting,
}

impl FactorKind {
    /// All categories in the fixed report order
    pub const ALL: [FactorKind; 5] = [
        Self::Crime,
        Self::Traffic,
        Self::Weather,
        Self::EmergencyResponse,
        Self::StreetLighting,
    ];

    /// Display name of the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Crime => "Crime Rate",
            Self::Traffic => "Traffic Safety",
            Self::Weather => "Weather Conditions",
            Self::EmergencyResponse => "Emergency Response",
            Self::StreetLighting => "Street Lighting",
        }
    }

    /// Weight in the composite score, in whole percent
    pub fn weight_percent(&self) -> u32 {
        match self {
            Self::Crime => 30,
            Self::Traffic => 25,
            Self::Weather => 15,
            Self::EmergencyResponse => 20,
            Self::StreetLighting => 10,
        }
    }
}

impl std::fmt::Display for FactorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Round and clamp a raw score into [0, 100]
pub fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

/// One category line of a safety report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyFactor {
    pub name: String,
    pub score: u8,
    pub status: SafetyStatus,
}

impl SafetyFactor {
    /// Build a factor; `status` always follows the reported score
    pub fn new(kind: FactorKind, score: u8) -> Self {
        let score = score.min(100);
        Self {
            name: kind.label().to_string(),
            score,
            status: SafetyStatus::for_factor(score),
        }
    }

    /// Build a factor from an unrounded sub-score
    pub fn from_raw(kind: FactorKind, raw: f64) -> Self {
        Self::new(kind, clamp_score(raw))
    }
}

/// A map marker near the queried location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DangerZone {
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub zone_type: SafetyStatus,
    pub score: u8,
    pub name: String,
    pub reason: String,
}

/// Aggregate safety report for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyData {
    pub location: String,
    pub score: u8,
    pub trend: Trend,
    pub factors: Vec<SafetyFactor>,
    pub danger_zones: Vec<DangerZone>,
}

impl SafetyData {
    /// Static record used when an assessment cannot be completed
    pub fn fallback(location: impl Into<String>) -> Self {
        let fixed = [60, 70, 80, 65, 50];
        Self {
            location: location.into(),
            score: 65,
            trend: Trend::Stable,
            factors: FactorKind::ALL
                .iter()
                .zip(fixed)
                .map(|(kind, score)| SafetyFactor::new(*kind, score))
                .collect(),
            danger_zones: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_status_thresholds() {
        assert_eq!(SafetyStatus::for_factor(100), SafetyStatus::Safe);
        assert_eq!(SafetyStatus::for_factor(70), SafetyStatus::Safe);
        assert_eq!(SafetyStatus::for_factor(69), SafetyStatus::Warning);
        assert_eq!(SafetyStatus::for_factor(40), SafetyStatus::Warning);
        assert_eq!(SafetyStatus::for_factor(39), SafetyStatus::Danger);
        assert_eq!(SafetyStatus::for_factor(0), SafetyStatus::Danger);
    }

    #[test]
    fn test_factor_status_monotonic() {
        let rank = |s: SafetyStatus| match s {
            SafetyStatus::Danger => 0,
            SafetyStatus::Warning => 1,
            SafetyStatus::Safe => 2,
        };
        for score in 0..100u8 {
            assert!(rank(SafetyStatus::for_factor(score)) <= rank(SafetyStatus::for_factor(score + 1)));
        }
    }

    #[test]
    fn test_zone_thresholds_differ_from_factor_thresholds() {
        assert_eq!(SafetyStatus::for_zone(75), SafetyStatus::Safe);
        assert_eq!(SafetyStatus::for_zone(74), SafetyStatus::Warning);
        assert_eq!(SafetyStatus::for_zone(50), SafetyStatus::Warning);
        assert_eq!(SafetyStatus::for_zone(49), SafetyStatus::Danger);

        // 72 is a safe factor but only a warning zone
        assert_eq!(SafetyStatus::for_factor(72), SafetyStatus::Safe);
        assert_eq!(SafetyStatus::for_zone(72), SafetyStatus::Warning);
    }

    #[test]
    fn test_trend_from_value() {
        assert_eq!(Trend::from_value(0.31), Trend::Up);
        assert_eq!(Trend::from_value(0.3), Trend::Stable);
        assert_eq!(Trend::from_value(0.0), Trend::Stable);
        assert_eq!(Trend::from_value(-0.3), Trend::Stable);
        assert_eq!(Trend::from_value(-0.31), Trend::Down);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total: u32 = FactorKind::ALL.iter().map(|k| k.weight_percent()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(78.25), 78);
        assert_eq!(clamp_score(69.5), 70);
        assert_eq!(clamp_score(-5.0), 0);
        assert_eq!(clamp_score(140.0), 100);
    }

    #[test]
    fn test_factor_status_follows_rounded_score() {
        let factor = SafetyFactor::from_raw(FactorKind::Crime, 69.6);
        assert_eq!(factor.score, 70);
        assert_eq!(factor.status, SafetyStatus::Safe);
        assert_eq!(factor.name, "Crime Rate");
    }

    #[test]
    fn test_fallback_record() {
        let data = SafetyData::fallback("Springfield");

        assert_eq!(data.location, "Springfield");
        assert_eq!(data.score, 65);
        assert_eq!(data.trend, Trend::Stable);
        assert!(data.danger_zones.is_empty());

        let summary: Vec<(&str, u8, SafetyStatus)> = data
            .factors
            .iter()
            .map(|f| (f.name.as_str(), f.score, f.status))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Crime Rate", 60, SafetyStatus::Warning),
                ("Traffic Safety", 70, SafetyStatus::Safe),
                ("Weather Conditions", 80, SafetyStatus::Safe),
                ("Emergency Response", 65, SafetyStatus::Warning),
                ("Street Lighting", 50, SafetyStatus::Warning),
            ]
        );
    }

    #[test]
    fn test_safety_data_json_shape() {
        let json = serde_json::to_value(SafetyData::fallback("X")).unwrap();
        assert!(json.get("dangerZones").is_some());
        assert_eq!(json["trend"], "stable");
        assert_eq!(json["factors"][0]["status"], "warning");

        let zone = DangerZone {
            lat: 1.0,
            lng: 2.0,
            zone_type: SafetyStatus::Danger,
            score: 10,
            name: "X Zone 1".to_string(),
            reason: "r".to_string(),
        };
        let json = serde_json::to_value(zone).unwrap();
        assert_eq!(json["type"], "danger");
    }
}
