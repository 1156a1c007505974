//! Habitat and street indexes built from raw point clouds.

use tracing::{info, warn};

use super::layers::{HabitatCategory, HabitatLayers};
use super::point_set::GeoPointSet;
use crate::coord::{degrees_to_meters, GeoPoint};
use crate::error::AnalysisError;

/// Unified index over every available habitat category.
///
/// Building fails if no category contributed any point: exposure cannot be
/// judged without habitat, and an empty index would silently mark every
/// light as unexposed.
#[derive(Debug, Clone)]
pub struct HabitatIndex {
    points: GeoPointSet,
    sources: Vec<HabitatCategory>,
}

impl HabitatIndex {
    /// Merge all present layers into one index.
    pub fn build(layers: &HabitatLayers) -> Result<Self, AnalysisError> {
        for category in layers.missing() {
            info!(category = %category, "Habitat layer missing, omitted from index");
        }

        let points = GeoPointSet::from_clouds(layers.clouds()).ok_or_else(|| {
            warn!("No habitat data loaded from any category");
            AnalysisError::NoHabitatData
        })?;

        let sources = layers.present();
        info!(
            points = points.len(),
            layers = sources.len(),
            "Built habitat index"
        );

        Ok(Self { points, sources })
    }

    /// Categories merged into this index.
    pub fn sources(&self) -> &[HabitatCategory] {
        &self.sources
    }

    /// Number of habitat points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a habitat index is never built empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distance in meters from each light to the nearest habitat point.
    pub fn distances_m(&self, queries: &[GeoPoint]) -> Vec<f64> {
        self.points
            .nearest_distance(queries)
            .into_iter()
            .map(degrees_to_meters)
            .collect()
    }
}

/// Index over residential ("quiet") street points.
#[derive(Debug, Clone)]
pub struct StreetIndex {
    points: GeoPointSet,
}

impl StreetIndex {
    /// Build a street index, or `None` when there are no street points.
    pub fn build(points: &[GeoPoint]) -> Option<Self> {
        match GeoPointSet::build(points.iter().copied()) {
            Some(points) => {
                info!(points = points.len(), "Built street index");
                Some(Self { points })
            }
            None => {
                info!("No residential street data, exposure falls back to habitat only");
                None
            }
        }
    }

    /// Number of street points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; see [`GeoPointSet::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distance in meters from each light to the nearest street point.
    pub fn distances_m(&self, queries: &[GeoPoint]) -> Vec<f64> {
        self.points
            .nearest_distance(queries)
            .into_iter()
            .map(degrees_to_meters)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_habitat_is_fatal() {
        let result = HabitatIndex::build(&HabitatLayers::new());
        assert!(matches!(result, Err(AnalysisError::NoHabitatData)));
    }

    #[test]
    fn test_single_layer_is_enough() {
        let layers = HabitatLayers::new().with(
            HabitatCategory::StandingWater,
            vec![GeoPoint::new(48.2, 16.3), GeoPoint::new(48.21, 16.31)],
        );
        let index = HabitatIndex::build(&layers).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.sources(), &[HabitatCategory::StandingWater]);
    }

    #[test]
    fn test_layers_are_merged() {
        let layers = HabitatLayers::new()
            .with(HabitatCategory::NatureReserve, vec![GeoPoint::new(48.20, 16.30)])
            .with(HabitatCategory::GreenBelt1, vec![GeoPoint::new(48.30, 16.50)]);
        let index = HabitatIndex::build(&layers).unwrap();

        let d = index.distances_m(&[GeoPoint::new(48.20, 16.30), GeoPoint::new(48.30, 16.50)]);
        assert_eq!(d, vec![0.0, 0.0]);
    }

    #[test]
    fn test_distances_are_in_meters() {
        let layers =
            HabitatLayers::new().with(HabitatCategory::NatureReserve, vec![GeoPoint::new(48.2, 16.3)]);
        let index = HabitatIndex::build(&layers).unwrap();

        let d = index.distances_m(&[GeoPoint::new(48.201, 16.3)]);
        assert!((d[0] - 111.139).abs() < 1e-6);
    }

    #[test]
    fn test_empty_street_cloud_is_absent() {
        assert!(StreetIndex::build(&[]).is_none());
    }

    #[test]
    fn test_street_index_distances() {
        let streets = StreetIndex::build(&[GeoPoint::new(48.25, 16.35)]).unwrap();
        assert_eq!(streets.len(), 1);
        assert_eq!(streets.distances_m(&[GeoPoint::new(48.25, 16.35)]), vec![0.0]);
    }
}
