//! Coordinate module
//!
//! Geographic points, the study-area bounding box, and the planar
//! degree-to-meter approximation used for every proximity test.
//!
//! Distances are computed as straight-line differences in degrees and then
//! scaled by a constant [`METERS_PER_DEGREE`]. This is only accurate near the
//! latitude of the study area (around 48°N); it is not a geodesic distance.

mod types;

pub use types::{BoundingBox, CoordError, GeoPoint, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Meters per degree used to convert planar degree distances.
pub const METERS_PER_DEGREE: f64 = 111_139.0;

/// Default study area: lat 48.12..=48.33, lon 16.18..=16.58.
pub const STUDY_AREA: BoundingBox = BoundingBox {
    min_lat: 48.12,
    max_lat: 48.33,
    min_lon: 16.18,
    max_lon: 16.58,
};

/// Converts a planar degree distance to meters.
///
/// Infinite input (no match) stays infinite.
#[inline]
pub fn degrees_to_meters(degrees: f64) -> f64 {
    degrees * METERS_PER_DEGREE
}

/// Converts meters to a planar degree distance.
#[inline]
pub fn meters_to_degrees(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE
}
