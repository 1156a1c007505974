//! Input records consumed by the analysis.

use std::fmt;

use crate::coord::GeoPoint;

/// Type of light fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightCategory {
    /// Fixture fitted with an acoustic wildlife deterrent
    Acoustic,
    /// Plain fixture without a deterrent
    Silent,
}

impl LightCategory {
    pub fn label(&self) -> &'static str {
        match self {
            LightCategory::Acoustic => "acoustic",
            LightCategory::Silent => "silent",
        }
    }
}

impl fmt::Display for LightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A light fixture with a resolved location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightRecord {
    pub location: GeoPoint,
    pub category: LightCategory,
}

impl LightRecord {
    pub fn new(location: GeoPoint, category: LightCategory) -> Self {
        Self { location, category }
    }

    pub fn acoustic(lat: f64, lon: f64) -> Self {
        Self::new(GeoPoint::new(lat, lon), LightCategory::Acoustic)
    }

    pub fn silent(lat: f64, lon: f64) -> Self {
        Self::new(GeoPoint::new(lat, lon), LightCategory::Silent)
    }
}

/// A recorded animal death. Only the location matters here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimalRecord {
    pub location: GeoPoint,
}

impl AnimalRecord {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            location: GeoPoint::new(lat, lon),
        }
    }
}

/// Locations of a slice of lights, in order.
pub fn light_locations(lights: &[LightRecord]) -> Vec<GeoPoint> {
    lights.iter().map(|l| l.location).collect()
}

/// Locations of a slice of animal records, in order.
pub fn animal_locations(animals: &[AnimalRecord]) -> Vec<GeoPoint> {
    animals.iter().map(|a| a.location).collect()
}
