//! Spatial indexes for proximity classification.
//!
//! ```text
//! HabitatLayers ──┐
//!   NatureReserve │
//!   StandingWater ├──► HabitatIndex (required)
//!   GreenBelt1    │
//!   GreenBelt2  ──┘
//! street points ─────► StreetIndex  (optional)
//! ```
//!
//! Both wrap a [`GeoPointSet`], an R-tree over `[lat, lon]` pairs. Indexes are
//! built once and only read afterwards, so they can be shared across sweep
//! iterations (and threads) without synchronization.
//!
//! # Usage
//!
//! ```
//! use lightrisk::coord::GeoPoint;
//! use lightrisk::spatial::{HabitatCategory, HabitatIndex, HabitatLayers};
//!
//! let layers = HabitatLayers::new()
//!     .with(HabitatCategory::NatureReserve, vec![GeoPoint::new(48.20, 16.30)]);
//! let index = HabitatIndex::build(&layers).unwrap();
//!
//! let d = index.distances_m(&[GeoPoint::new(48.20, 16.30)]);
//! assert_eq!(d, vec![0.0]);
//! ```

mod index;
mod layers;
mod point_set;

pub use index::{HabitatIndex, StreetIndex};
pub use layers::{HabitatCategory, HabitatLayers};
pub use point_set::{nearest_distance_or_infinite, GeoPointSet};
