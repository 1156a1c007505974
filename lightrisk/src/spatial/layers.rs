//! Habitat layer definitions.
//!
//! Each habitat category is an independent point cloud. Categories are merged
//! into a single [`HabitatIndex`](super::HabitatIndex); any subset of them may
//! be missing.

use std::collections::BTreeMap;
use std::fmt;

use crate::coord::GeoPoint;

/// Category of sensitive habitat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HabitatCategory {
    /// Protected nature reserves
    NatureReserve,
    /// Ponds, lakes and other standing water
    StandingWater,
    /// First greenbelt layer
    GreenBelt1,
    /// Second greenbelt layer
    GreenBelt2,
}

impl HabitatCategory {
    /// All categories in load order.
    pub const ALL: [HabitatCategory; 4] = [
        HabitatCategory::NatureReserve,
        HabitatCategory::StandingWater,
        HabitatCategory::GreenBelt1,
        HabitatCategory::GreenBelt2,
    ];

    /// Human-readable label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            HabitatCategory::NatureReserve => "Nature Reserves",
            HabitatCategory::StandingWater => "Standing Water",
            HabitatCategory::GreenBelt1 => "Green Belt 1",
            HabitatCategory::GreenBelt2 => "Green Belt 2",
        }
    }
}

impl fmt::Display for HabitatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Point clouds per habitat category.
///
/// Only categories that actually produced points are stored.
#[derive(Debug, Clone, Default)]
pub struct HabitatLayers {
    layers: BTreeMap<HabitatCategory, Vec<GeoPoint>>,
}

impl HabitatLayers {
    /// Create an empty layer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category's points.
    ///
    /// `None` or an empty cloud leaves the category absent.
    pub fn insert(&mut self, category: HabitatCategory, points: Option<Vec<GeoPoint>>) {
        match points {
            Some(points) if !points.is_empty() => {
                self.layers.insert(category, points);
            }
            _ => {
                self.layers.remove(&category);
            }
        }
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, category: HabitatCategory, points: Vec<GeoPoint>) -> Self {
        self.insert(category, Some(points));
        self
    }

    /// Categories that have points.
    pub fn present(&self) -> Vec<HabitatCategory> {
        self.layers.keys().copied().collect()
    }

    /// Categories with no points.
    pub fn missing(&self) -> Vec<HabitatCategory> {
        HabitatCategory::ALL
            .into_iter()
            .filter(|c| !self.layers.contains_key(c))
            .collect()
    }

    /// Total points across all present categories.
    pub fn point_count(&self) -> usize {
        self.layers.values().map(Vec::len).sum()
    }

    /// Iterate over present point clouds.
    pub fn clouds(&self) -> impl Iterator<Item = &[GeoPoint]> {
        self.layers.values().map(Vec::as_slice)
    }

    /// True if no category has points.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cloud_is_not_stored() {
        let mut layers = HabitatLayers::new();
        layers.insert(HabitatCategory::StandingWater, Some(Vec::new()));
        layers.insert(HabitatCategory::NatureReserve, None);
        assert!(layers.is_empty());
        assert_eq!(layers.missing().len(), 4);
    }

    #[test]
    fn test_present_and_missing_partition_categories() {
        let layers = HabitatLayers::new()
            .with(HabitatCategory::GreenBelt2, vec![GeoPoint::new(48.2, 16.3)])
            .with(HabitatCategory::NatureReserve, vec![GeoPoint::new(48.1, 16.2)]);

        assert_eq!(
            layers.present(),
            vec![HabitatCategory::NatureReserve, HabitatCategory::GreenBelt2]
        );
        assert_eq!(
            layers.missing(),
            vec![HabitatCategory::StandingWater, HabitatCategory::GreenBelt1]
        );
        assert_eq!(layers.point_count(), 2);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(HabitatCategory::GreenBelt1.to_string(), "Green Belt 1");
    }
}
