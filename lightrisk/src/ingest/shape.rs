//! Coordinate extraction from free-text geometry cells.
//!
//! Geometry columns hold WKT-ish text such as `POINT (16.37 48.21)` or
//! `MULTIPOLYGON (((16.30 48.20, 16.31 48.21, ...)))`, always in
//! `<lon> <lat>` order. No geometry parsing is attempted; coordinates are
//! pulled out with regular expressions.

use std::sync::OnceLock;

use regex::Regex;

use crate::coord::GeoPoint;

/// `<lon> <lat>` pairs of unsigned decimals.
fn pair_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+\.\d+)\s+(\d+\.\d+)").expect("valid regex"))
}

/// Any signed decimal or integer token.
fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[-+]?\d*\.\d+|\d+").expect("valid regex"))
}

/// Every `<lon> <lat>` decimal pair in a geometry cell.
pub fn shape_points(shape: &str) -> Vec<GeoPoint> {
    pair_pattern()
        .captures_iter(shape)
        .filter_map(|caps| {
            let lon: f64 = caps[1].parse().ok()?;
            let lat: f64 = caps[2].parse().ok()?;
            Some(GeoPoint::new(lat, lon))
        })
        .collect()
}

/// Location of a point geometry: the first two numeric tokens as lon, lat.
///
/// Returns `None` if the cell has fewer than two numbers.
pub fn shape_location(shape: &str) -> Option<GeoPoint> {
    let mut numbers = number_pattern()
        .find_iter(shape)
        .filter_map(|m| m.as_str().parse::<f64>().ok());
    let lon = numbers.next()?;
    let lat = numbers.next()?;
    Some(GeoPoint::new(lat, lon))
}
