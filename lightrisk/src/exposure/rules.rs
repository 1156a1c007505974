//! Exposure rules.
//!
//! A rule answers "is this location exposed?" for a batch of locations. The
//! classifier OR-s any number of rules together, so new proximity conditions
//! can be added without touching the classifier.

use crate::coord::GeoPoint;
use crate::spatial::{HabitatIndex, StreetIndex};

/// A single, independent exposure condition.
pub trait ExposureRule: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// One flag per location, in input order.
    fn evaluate(&self, locations: &[GeoPoint]) -> Vec<bool>;
}

/// Exposed when the nearest habitat point is strictly closer than the threshold.
pub struct HabitatProximity<'a> {
    index: &'a HabitatIndex,
    threshold_m: f64,
}

impl<'a> HabitatProximity<'a> {
    pub fn new(index: &'a HabitatIndex, threshold_m: f64) -> Self {
        Self { index, threshold_m }
    }

    pub fn threshold_m(&self) -> f64 {
        self.threshold_m
    }
}

impl ExposureRule for HabitatProximity<'_> {
    fn name(&self) -> &str {
        "habitat"
    }

    fn evaluate(&self, locations: &[GeoPoint]) -> Vec<bool> {
        self.index
            .distances_m(locations)
            .into_iter()
            .map(|d| d < self.threshold_m)
            .collect()
    }
}

/// Exposed when the nearest quiet-street point is strictly closer than the buffer.
pub struct StreetProximity<'a> {
    index: &'a StreetIndex,
    buffer_m: f64,
}

impl<'a> StreetProximity<'a> {
    pub fn new(index: &'a StreetIndex, buffer_m: f64) -> Self {
        Self { index, buffer_m }
    }
}

impl ExposureRule for StreetProximity<'_> {
    fn name(&self) -> &str {
        "quiet_street"
    }

    fn evaluate(&self, locations: &[GeoPoint]) -> Vec<bool> {
        self.index
            .distances_m(locations)
            .into_iter()
            .map(|d| d < self.buffer_m)
            .collect()
    }
}

/// Logical OR of exposure rules.
///
/// An empty rule set marks nothing as exposed.
#[derive(Default)]
pub struct ExposureRuleSet<'a> {
    rules: Vec<Box<dyn ExposureRule + 'a>>,
}

impl<'a> ExposureRuleSet<'a> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule.
    pub fn push(&mut self, rule: impl ExposureRule + 'a) {
        self.rules.push(Box::new(rule));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, rule: impl ExposureRule + 'a) -> Self {
        self.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Names of the rules, in evaluation order.
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Exposure mask: true where at least one rule fires.
    pub fn mask(&self, locations: &[GeoPoint]) -> Vec<bool> {
        let mut keep = vec![false; locations.len()];
        for rule in &self.rules {
            for (slot, hit) in keep.iter_mut().zip(rule.evaluate(locations)) {
                *slot |= hit;
            }
        }
        keep
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::{HabitatCategory, HabitatLayers};

    struct Fixed(Vec<bool>);

    impl ExposureRule for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn evaluate(&self, _locations: &[GeoPoint]) -> Vec<bool> {
            self.0.clone()
        }
    }

    fn habitat_at(lat: f64, lon: f64) -> HabitatIndex {
        let layers =
            HabitatLayers::new().with(HabitatCategory::NatureReserve, vec![GeoPoint::new(lat, lon)]);
        HabitatIndex::build(&layers).unwrap()
    }

    #[test]
    fn test_empty_rule_set_exposes_nothing() {
        let rules = ExposureRuleSet::new();
        assert_eq!(rules.mask(&[GeoPoint::new(48.2, 16.3)]), vec![false]);
    }

    #[test]
    fn test_rules_are_or_combined() {
        let rules = ExposureRuleSet::new()
            .with(Fixed(vec![true, false, false]))
            .with(Fixed(vec![false, false, true]));
        let locations = [GeoPoint::new(0.0, 0.0); 3];
        assert_eq!(rules.mask(&locations), vec![true, false, true]);
        assert_eq!(rules.names(), vec!["fixed", "fixed"]);
    }

    #[test]
    fn test_habitat_rule_is_strict() {
        let index = habitat_at(48.2, 16.3);
        let light = GeoPoint::new(48.201, 16.3);
        let distance = index.distances_m(&[light])[0];

        let at_distance = HabitatProximity::new(&index, distance);
        assert_eq!(at_distance.evaluate(&[light]), vec![false]);

        let just_above = HabitatProximity::new(&index, distance + 1e-6);
        assert_eq!(just_above.evaluate(&[light]), vec![true]);
    }

    #[test]
    fn test_street_rule_uses_buffer() {
        let streets = StreetIndex::build(&[GeoPoint::new(48.25, 16.35)]).unwrap();
        let rule = StreetProximity::new(&streets, 50.0);
        // ~11 m and ~111 m away
        let near = GeoPoint::new(48.2501, 16.35);
        let far = GeoPoint::new(48.251, 16.35);
        assert_eq!(rule.evaluate(&[near, far]), vec![true, false]);
    }
}
