//! Danger-zone markers
//!
//! Scatters 3 to 7 illustrative markers within ±0.01° of the queried location.
//! Zone scores are independent of the sub-scores and banded with the 75/50
//! zone thresholds.

use crate::geo::Coordinates;
use crate::random::RandomSource;
use crate::safety::types::{DangerZone, SafetyStatus};
use std::sync::Arc;

/// Fewest zones generated per query
pub const MIN_ZONES: usize = 3;
/// Most zones generated per query
pub const MAX_ZONES: usize = 7;
/// Largest offset from the center on each axis, in degrees
pub const MAX_OFFSET_DEGREES: f64 = 0.01;

/// Canned reason shown for each zone band
pub fn zone_reason(band: SafetyStatus) -> &'static str {
    match band {
        SafetyStatus::Safe => "Well-lit area with good security",
        SafetyStatus::Warning => "Moderate crime reports or poor lighting",
        SafetyStatus::Danger => "High crime area or safety concerns",
    }
}

/// Generates the danger zones for a query
pub struct DangerZoneGenerator {
    rng: Arc<dyn RandomSource>,
}

impl DangerZoneGenerator {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Generate a fresh set of zones around `location`
    pub fn generate(&self, location: &Coordinates) -> Vec<DangerZone> {
        let rng = self.rng.as_ref();
        let count = MIN_ZONES + rng.below(MAX_ZONES - MIN_ZONES + 1);

        (0..count)
            .map(|i| {
                let lat = location.lat + rng.uniform(-MAX_OFFSET_DEGREES, MAX_OFFSET_DEGREES);
                let lng = location.lng + rng.uniform(-MAX_OFFSET_DEGREES, MAX_OFFSET_DEGREES);
                let score = rng.below(100) as u8;
                let band = SafetyStatus::for_zone(score);

                DangerZone {
                    lat,
                    lng,
                    zone_type: band,
                    score,
                    name: format!("{} Zone {}", location.name, i + 1),
                    reason: zone_reason(band).to_string(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::pseudo::{ConstantRandom, SeededRandom};

    fn nyc() -> Coordinates {
        Coordinates::new(40.7128, -74.006, "New York, NY")
    }

    #[test]
    fn test_zone_count_in_range() {
        let generator = DangerZoneGenerator::new(Arc::new(SeededRandom::new(2024)));
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            let zones = generator.generate(&nyc());
            assert!((MIN_ZONES..=MAX_ZONES).contains(&zones.len()));
            seen.insert(zones.len());
        }

        assert_eq!(seen.len(), MAX_ZONES - MIN_ZONES + 1, "every count should occur");
    }

    #[test]
    fn test_zones_near_center_and_banded() {
        let generator = DangerZoneGenerator::new(Arc::new(SeededRandom::new(7)));
        let center = nyc();

        for _ in 0..200 {
            for zone in generator.generate(&center) {
                assert!((zone.lat - center.lat).abs() <= MAX_OFFSET_DEGREES);
                assert!((zone.lng - center.lng).abs() <= MAX_OFFSET_DEGREES);
                assert!(zone.score <= 100);
                assert_eq!(zone.zone_type, SafetyStatus::for_zone(zone.score));
                assert_eq!(zone.reason, zone_reason(zone.zone_type));
            }
        }
    }

    #[test]
    fn test_zone_names() {
        let generator = DangerZoneGenerator::new(Arc::new(ConstantRandom::new(0.0)));
        let zones = generator.generate(&nyc());

        assert_eq!(zones.len(), 3);
        let names: Vec<&str> = zones.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["New York, NY Zone 1", "New York, NY Zone 2", "New York, NY Zone 3"]
        );
    }

    #[test]
    fn test_constant_draw_layout() {
        // 0.9 -> 3 + floor(4.5) = 7 zones, offset +0.008, score 90
        let generator = DangerZoneGenerator::new(Arc::new(ConstantRandom::new(0.9)));
        let zones = generator.generate(&nyc());

        assert_eq!(zones.len(), 7);
        for zone in &zones {
            approx::assert_relative_eq!(zone.lat, 40.7128 + 0.008, epsilon = 1e-9);
            assert_eq!(zone.score, 90);
            assert_eq!(zone.zone_type, SafetyStatus::Safe);
            assert_eq!(zone.reason, "Well-lit area with good security");
        }
    }

    #[test]
    fn test_regenerated_every_call() {
        let generator = DangerZoneGenerator::new(Arc::new(SeededRandom::new(1)));
        let first = generator.generate(&nyc());
        let second = generator.generate(&nyc());
        assert_ne!(first, second);
    }
}
