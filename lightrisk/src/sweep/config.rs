//! Immutable sweep parameters.

use crate::error::AnalysisError;

/// Habitat thresholds in meters, largest first.
pub const DEFAULT_THRESHOLDS_M: [f64; 5] = [250.0, 200.0, 150.0, 100.0, 50.0];

/// Radius for associating a death with its nearest exposed light.
pub const DEFAULT_CHECK_DISTANCE_M: f64 = 50.0;

/// Fixed quiet-street buffer; not part of the sweep.
pub const DEFAULT_STREET_BUFFER_M: f64 = 50.0;

/// p-value below which a row is flagged significant.
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Parameters for one sensitivity sweep.
///
/// Only the habitat threshold varies between rows; check distance and street
/// buffer are held constant across the whole sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Habitat thresholds in meters, in presentation order
    pub thresholds_m: Vec<f64>,
    /// Death association radius in meters
    pub check_distance_m: f64,
    /// Quiet-street buffer in meters
    pub street_buffer_m: f64,
    /// Significance level for the `significant` flag
    pub significance_level: f64,
    /// Evaluate thresholds on the rayon thread pool
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            thresholds_m: DEFAULT_THRESHOLDS_M.to_vec(),
            check_distance_m: DEFAULT_CHECK_DISTANCE_M,
            street_buffer_m: DEFAULT_STREET_BUFFER_M,
            significance_level: DEFAULT_SIGNIFICANCE_LEVEL,
            parallel: false,
        }
    }
}

impl SweepConfig {
    /// Replace the threshold list.
    pub fn with_thresholds(mut self, thresholds_m: Vec<f64>) -> Self {
        self.thresholds_m = thresholds_m;
        self
    }

    /// Toggle parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.thresholds_m.is_empty() {
            return Err(AnalysisError::InvalidConfig(
                "at least one habitat threshold is required".to_string(),
            ));
        }
        if let Some(bad) = self
            .thresholds_m
            .iter()
            .find(|t| !t.is_finite() || **t <= 0.0)
        {
            return Err(AnalysisError::InvalidConfig(format!(
                "habitat threshold must be a positive number of meters, got {}",
                bad
            )));
        }
        for (name, value) in [
            ("check_distance", self.check_distance_m),
            ("street_buffer", self.street_buffer_m),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AnalysisError::InvalidConfig(format!(
                    "{} must be a positive number of meters, got {}",
                    name, value
                )));
            }
        }
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(AnalysisError::InvalidConfig(format!(
                "significance level must be between 0 and 1, got {}",
                self.significance_level
            )));
        }
        Ok(())
    }
}
