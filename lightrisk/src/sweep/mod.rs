//! Habitat-threshold sensitivity sweep.
//!
//! For each threshold the engine classifies both light categories, counts
//! deaths near the exposed lights, and runs a two-sided Fisher exact test on
//! `[[deaths_acoustic, safe_acoustic], [deaths_silent, safe_silent]]`. When
//! either category has no exposed light the test is skipped and the row
//! reports `p = 1.0`.

mod config;
mod engine;

pub use config::{
    SweepConfig, DEFAULT_CHECK_DISTANCE_M, DEFAULT_SIGNIFICANCE_LEVEL, DEFAULT_STREET_BUFFER_M,
    DEFAULT_THRESHOLDS_M,
};
pub use engine::{CategoryOutcome, SensitivityEngine, SweepReport, SweepRow};
