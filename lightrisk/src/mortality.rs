//! Association of animal deaths with nearby exposed lights.

use tracing::debug;

use crate::coord::degrees_to_meters;
use crate::records::{animal_locations, light_locations, AnimalRecord, LightRecord};
use crate::spatial::{nearest_distance_or_infinite, GeoPointSet};

/// Counts animal deaths that occurred close to a set of lights.
///
/// Each animal is matched to its single nearest light, so the count is
/// bounded by the number of animal records, not by the number of lights.
#[derive(Debug, Clone, Copy)]
pub struct MortalityAssociator {
    check_distance_m: f64,
}

impl MortalityAssociator {
    pub fn new(check_distance_m: f64) -> Self {
        Self { check_distance_m }
    }

    pub fn check_distance_m(&self) -> f64 {
        self.check_distance_m
    }

    /// Number of animals whose nearest light is strictly within the check distance.
    pub fn count(&self, lights: &[LightRecord], animals: &[AnimalRecord]) -> usize {
        count_nearby_deaths(lights, animals, self.check_distance_m)
    }
}

/// Number of animals whose nearest light in `exposed_lights` lies strictly
/// closer than `check_distance_m`.
///
/// An empty light set builds no index and matches no animal.
pub fn count_nearby_deaths(
    exposed_lights: &[LightRecord],
    animals: &[AnimalRecord],
    check_distance_m: f64,
) -> usize {
    let index = GeoPointSet::build(light_locations(exposed_lights));

    let deaths = nearest_distance_or_infinite(index.as_ref(), &animal_locations(animals))
        .into_iter()
        .filter(|&d| degrees_to_meters(d) < check_distance_m)
        .count();

    debug!(
        lights = exposed_lights.len(),
        animals = animals.len(),
        deaths,
        "Associated deaths with lights"
    );
    deaths
}
