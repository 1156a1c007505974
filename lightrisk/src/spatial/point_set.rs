//! Immutable nearest-neighbor index over geographic points.
//!
//! Backed by an R-tree bulk loaded once at construction. Points are stored as
//! `[lat, lon]` arrays so the tree's squared Euclidean metric matches the
//! planar degree distance used throughout the crate.

use rstar::RTree;

use crate::coord::GeoPoint;

/// Immutable set of geographic points supporting nearest-neighbor queries.
///
/// A set always holds at least one point. An empty source is represented as
/// an absent set (`None` from [`GeoPointSet::build`]) rather than an empty
/// tree, so callers have to decide explicitly what "no index" means.
#[derive(Debug, Clone)]
pub struct GeoPointSet {
    tree: RTree<[f64; 2]>,
}

impl GeoPointSet {
    /// Build a set from points.
    ///
    /// Returns `None` when `points` is empty.
    pub fn build<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let coords: Vec<[f64; 2]> = points.into_iter().map(GeoPoint::to_array).collect();
        if coords.is_empty() {
            return None;
        }
        Some(Self {
            tree: RTree::bulk_load(coords),
        })
    }

    /// Build a set over the union of several point clouds.
    ///
    /// Returns `None` when the union is empty.
    pub fn from_clouds<'a, I>(clouds: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [GeoPoint]>,
    {
        Self::build(clouds.into_iter().flatten().copied())
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Always false for a built set; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Closest indexed point and its planar degree distance.
    pub fn nearest(&self, query: &GeoPoint) -> Option<(GeoPoint, f64)> {
        self.tree.nearest_neighbor(&query.to_array()).map(|found| {
            let point = GeoPoint::from(*found);
            (point, query.planar_distance(&point))
        })
    }

    /// Planar degree distance from `query` to the closest indexed point.
    #[inline]
    pub fn nearest_distance_to(&self, query: &GeoPoint) -> f64 {
        self.nearest(query)
            .map(|(_, distance)| distance)
            .unwrap_or(f64::INFINITY)
    }

    /// One nearest distance (degree units) per query point, in query order.
    pub fn nearest_distance(&self, queries: &[GeoPoint]) -> Vec<f64> {
        queries.iter().map(|q| self.nearest_distance_to(q)).collect()
    }
}

/// Nearest distances against a possibly absent set.
///
/// An absent set reports "no match" (`f64::INFINITY`) for every query.
pub fn nearest_distance_or_infinite(set: Option<&GeoPointSet>, queries: &[GeoPoint]) -> Vec<f64> {
    match set {
        Some(set) => set.nearest_distance(queries),
        None => vec![f64::INFINITY; queries.len()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(48.20, 16.30),
            GeoPoint::new(48.21, 16.31),
            GeoPoint::new(48.22, 16.32),
        ]
    }

    #[test]
    fn test_empty_build_is_absent() {
        assert!(GeoPointSet::build(Vec::new()).is_none());
        assert!(GeoPointSet::from_clouds(Vec::<&[GeoPoint]>::new()).is_none());
    }

    #[test]
    fn test_len_counts_all_points() {
        let set = GeoPointSet::build(grid()).unwrap();
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_exact_hit_has_zero_distance() {
        let set = GeoPointSet::build(grid()).unwrap();
        let distances = set.nearest_distance(&[GeoPoint::new(48.21, 16.31)]);
        assert_eq!(distances, vec![0.0]);
    }

    #[test]
    fn test_nearest_picks_closest_point() {
        let set = GeoPointSet::build(grid()).unwrap();
        let (point, distance) = set.nearest(&GeoPoint::new(48.219, 16.321)).unwrap();
        assert_eq!(point, GeoPoint::new(48.22, 16.32));
        assert!((distance - 0.001f64.hypot(0.001)).abs() < 1e-12);
    }

    #[test]
    fn test_distances_preserve_query_order() {
        let set = GeoPointSet::build(grid()).unwrap();
        let queries = [GeoPoint::new(48.22, 16.32), GeoPoint::new(48.30, 16.30)];
        let distances = set.nearest_distance(&queries);
        assert_eq!(distances.len(), 2);
        assert_eq!(distances[0], 0.0);
        assert!((distances[1] - 0.08f64.hypot(0.02)).abs() < 1e-9);
    }

    #[test]
    fn test_from_clouds_merges_sources() {
        let a = vec![GeoPoint::new(48.0, 16.0)];
        let b = vec![GeoPoint::new(48.5, 16.5), GeoPoint::new(48.6, 16.6)];
        let set = GeoPointSet::from_clouds([a.as_slice(), b.as_slice()]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.nearest_distance_to(&GeoPoint::new(48.6, 16.6)), 0.0);
    }

    #[test]
    fn test_absent_set_reports_no_match() {
        let queries = [GeoPoint::new(48.2, 16.3), GeoPoint::new(48.3, 16.4)];
        let distances = nearest_distance_or_infinite(None, &queries);
        assert_eq!(distances.len(), 2);
        assert!(distances.iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn test_matches_brute_force() {
        let points: Vec<GeoPoint> = (0..200)
            .map(|i| {
                let f = i as f64;
                GeoPoint::new(48.12 + (f * 0.37).sin().abs() * 0.2, 16.18 + (f * 0.11).cos().abs() * 0.4)
            })
            .collect();
        let set = GeoPointSet::build(points.clone()).unwrap();

        let query = GeoPoint::new(48.25, 16.40);
        let brute = points
            .iter()
            .map(|p| query.planar_distance(p))
            .fold(f64::INFINITY, f64::min);
        assert!((set.nearest_distance_to(&query) - brute).abs() < 1e-12);
    }
}
