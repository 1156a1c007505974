//! Light classification under a habitat threshold.

use tracing::debug;

use super::rules::{ExposureRuleSet, HabitatProximity, StreetProximity};
use crate::records::{light_locations, LightRecord};
use crate::spatial::{HabitatIndex, StreetIndex};

/// Partitions lights into exposed / not exposed.
///
/// A light is exposed if it is strictly closer than the habitat threshold to
/// any habitat point, OR (when a street index exists) strictly closer than
/// the fixed street buffer to any quiet-street point. Only the habitat
/// threshold varies between calls.
#[derive(Debug, Clone, Copy)]
pub struct LightClassifier<'a> {
    habitat: &'a HabitatIndex,
    street: Option<&'a StreetIndex>,
    street_buffer_m: f64,
}

impl<'a> LightClassifier<'a> {
    pub fn new(
        habitat: &'a HabitatIndex,
        street: Option<&'a StreetIndex>,
        street_buffer_m: f64,
    ) -> Self {
        Self {
            habitat,
            street,
            street_buffer_m,
        }
    }

    /// The rule set for a given habitat threshold.
    pub fn rules(&self, habitat_threshold_m: f64) -> ExposureRuleSet<'a> {
        let mut rules = ExposureRuleSet::new().with(HabitatProximity::new(
            self.habitat,
            habitat_threshold_m,
        ));
        if let Some(street) = self.street {
            rules.push(StreetProximity::new(street, self.street_buffer_m));
        }
        rules
    }

    /// Exposure flag per light, in input order.
    pub fn mask(&self, lights: &[LightRecord], habitat_threshold_m: f64) -> Vec<bool> {
        if lights.is_empty() {
            return Vec::new();
        }
        self.rules(habitat_threshold_m)
            .mask(&light_locations(lights))
    }

    /// Exposed subset of `lights`, preserving input order.
    pub fn classify(&self, lights: &[LightRecord], habitat_threshold_m: f64) -> Vec<LightRecord> {
        let exposed: Vec<LightRecord> = lights
            .iter()
            .zip(self.mask(lights, habitat_threshold_m))
            .filter_map(|(light, keep)| keep.then_some(*light))
            .collect();

        debug!(
            threshold_m = habitat_threshold_m,
            input = lights.len(),
            exposed = exposed.len(),
            "Classified lights"
        );
        exposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::{meters_to_degrees, GeoPoint};
    use crate::spatial::{HabitatCategory, HabitatLayers};
    use proptest::prelude::*;

    fn habitat() -> HabitatIndex {
        let layers = HabitatLayers::new().with(
            HabitatCategory::NatureReserve,
            vec![
                GeoPoint::new(48.20, 16.30),
                GeoPoint::new(48.21, 16.31),
                GeoPoint::new(48.22, 16.32),
            ],
        );
        HabitatIndex::build(&layers).unwrap()
    }

    /// A light `meters` north of the first habitat point.
    fn light_north(meters: f64) -> LightRecord {
        LightRecord::acoustic(48.20 - meters_to_degrees(meters), 16.30)
    }

    #[test]
    fn test_empty_lights_yield_empty_subset() {
        let habitat = habitat();
        let classifier = LightClassifier::new(&habitat, None, 50.0);
        for threshold in [250.0, 50.0] {
            assert!(classifier.classify(&[], threshold).is_empty());
        }
    }

    #[test]
    fn test_threshold_selects_near_lights() {
        let habitat = habitat();
        let classifier = LightClassifier::new(&habitat, None, 50.0);
        let lights = vec![light_north(30.0), light_north(120.0), light_north(220.0)];

        assert_eq!(classifier.classify(&lights, 250.0).len(), 3);
        assert_eq!(classifier.classify(&lights, 150.0).len(), 2);
        assert_eq!(classifier.classify(&lights, 50.0).len(), 1);
    }

    #[test]
    fn test_output_preserves_input_order() {
        let habitat = habitat();
        let classifier = LightClassifier::new(&habitat, None, 50.0);
        let lights = vec![
            light_north(10.0),
            LightRecord::silent(48.50, 16.90),
            LightRecord::acoustic(48.22, 16.32),
        ];
        let exposed = classifier.classify(&lights, 100.0);
        assert_eq!(exposed, vec![lights[0], lights[2]]);
    }

    #[test]
    fn test_street_condition_is_or_combined() {
        let habitat = habitat();
        let far_light = LightRecord::silent(48.30, 16.50);
        let streets = StreetIndex::build(&[GeoPoint::new(48.30, 16.5002)]).unwrap();

        let habitat_only = LightClassifier::new(&habitat, None, 50.0);
        assert!(habitat_only.classify(&[far_light], 250.0).is_empty());

        let with_streets = LightClassifier::new(&habitat, Some(&streets), 50.0);
        // Street buffer is independent of the habitat threshold.
        for threshold in [250.0, 50.0, 0.0] {
            assert_eq!(with_streets.classify(&[far_light], threshold), vec![far_light]);
        }
    }

    #[test]
    fn test_rules_include_street_only_when_present() {
        let habitat = habitat();
        let streets = StreetIndex::build(&[GeoPoint::new(48.3, 16.5)]).unwrap();
        assert_eq!(LightClassifier::new(&habitat, None, 50.0).rules(100.0).len(), 1);
        assert_eq!(
            LightClassifier::new(&habitat, Some(&streets), 50.0)
                .rules(100.0)
                .names(),
            vec!["habitat", "quiet_street"]
        );
    }

    #[test]
    fn test_light_exactly_at_threshold_is_not_exposed() {
        let habitat = habitat();
        let classifier = LightClassifier::new(&habitat, None, 50.0);
        let light = LightRecord::acoustic(48.201, 16.30);
        let exact = habitat.distances_m(&[light.location])[0];

        assert!(classifier.classify(&[light], exact).is_empty());
        assert_eq!(classifier.classify(&[light], exact + 1e-6).len(), 1);
    }

    proptest! {
        /// Property: the exposed set at a smaller threshold is a subset of the
        /// exposed set at a larger threshold.
        #[test]
        fn prop_classification_is_monotone(
            offsets in prop::collection::vec((-0.01f64..0.01, -0.01f64..0.01), 0..40),
            t1 in 0.0f64..400.0,
            t2 in 0.0f64..400.0,
        ) {
            let habitat = habitat();
            let classifier = LightClassifier::new(&habitat, None, 50.0);
            let lights: Vec<LightRecord> = offsets
                .iter()
                .map(|(dlat, dlon)| LightRecord::silent(48.21 + dlat, 16.31 + dlon))
                .collect();

            let (low, high) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            let low_mask = classifier.mask(&lights, low);
            let high_mask = classifier.mask(&lights, high);
            for (l, h) in low_mask.iter().zip(&high_mask) {
                prop_assert!(!*l || *h);
            }
        }

        /// Property: monotonicity also holds with the street buffer OR-ed in,
        /// and every light within the buffer is exposed at any threshold.
        #[test]
        fn prop_classification_with_streets_is_monotone(
            offsets in prop::collection::vec((-0.01f64..0.01, -0.01f64..0.01), 0..40),
            street_offsets in prop::collection::vec((-0.01f64..0.01, -0.01f64..0.01), 1..10),
            t1 in 0.0f64..400.0,
            t2 in 0.0f64..400.0,
        ) {
            let habitat = habitat();
            let street_points: Vec<GeoPoint> = street_offsets
                .iter()
                .map(|(dlat, dlon)| GeoPoint::new(48.21 + dlat, 16.31 + dlon))
                .collect();
            let streets = StreetIndex::build(&street_points).unwrap();
            let classifier = LightClassifier::new(&habitat, Some(&streets), 50.0);
            let lights: Vec<LightRecord> = offsets
                .iter()
                .map(|(dlat, dlon)| LightRecord::silent(48.21 + dlat, 16.31 + dlon))
                .collect();

            let (low, high) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            let low_mask = classifier.mask(&lights, low);
            let high_mask = classifier.mask(&lights, high);
            let locations: Vec<GeoPoint> = lights.iter().map(|l| l.location).collect();
            let street_distances = streets.distances_m(&locations);
            for ((l, h), street_m) in low_mask.iter().zip(&high_mask).zip(&street_distances) {
                prop_assert!(!*l || *h);
                if *street_m < 50.0 {
                    prop_assert!(*l);
                }
            }
        }
    }
}
