//! LightRisk - Light type vs. wildlife mortality sensitivity analysis
//!
//! Classifies street lights as "exposed" when they sit close to sensitive
//! habitat or to a quiet residential street, associates recorded animal
//! deaths with their nearest exposed light, and tests whether acoustic
//! deterrent lights and silent lights differ in mortality. The habitat
//! distance threshold is swept to check that the result is robust.
//!
//! # High-Level API
//!
//! ```
//! use lightrisk::coord::GeoPoint;
//! use lightrisk::ingest::Dataset;
//! use lightrisk::records::{AnimalRecord, LightRecord};
//! use lightrisk::spatial::{HabitatCategory, HabitatLayers};
//! use lightrisk::sweep::SweepConfig;
//!
//! let dataset = Dataset {
//!     habitat: HabitatLayers::new()
//!         .with(HabitatCategory::NatureReserve, vec![GeoPoint::new(48.20, 16.30)]),
//!     acoustic: vec![LightRecord::acoustic(48.20, 16.30)],
//!     silent: vec![LightRecord::silent(48.50, 16.90)],
//!     animals: vec![AnimalRecord::new(48.20, 16.3001)],
//!     ..Dataset::default()
//! };
//!
//! let report = lightrisk::analysis::run_sweep(&dataset, SweepConfig::default()).unwrap();
//! assert_eq!(report.rows.len(), 5);
//! assert_eq!(report.rows[0].acoustic.deaths, 1);
//! ```

pub mod analysis;
pub mod config;
pub mod coord;
pub mod error;
pub mod exposure;
pub mod ingest;
pub mod logging;
pub mod mortality;
pub mod records;
pub mod report;
pub mod spatial;
pub mod stats;
pub mod sweep;

pub use error::AnalysisError;

/// Version of the LightRisk library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
