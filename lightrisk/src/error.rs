//! Top-level analysis errors.

use crate::config::ConfigFileError;
use crate::ingest::IngestError;

/// Errors that stop an analysis run.
///
/// Degenerate inputs (an empty exposed subset, a missing street layer) are
/// not errors; they are absorbed by the sweep so every threshold still
/// produces a row.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Every habitat layer was missing or empty.
    #[error("No habitat data loaded: at least one habitat layer is required")]
    NoHabitatData,

    /// Required input could not be read.
    #[error("Failed to load input data: {0}")]
    Ingest(#[from] IngestError),

    /// Configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigFileError),

    /// Sweep parameters are unusable.
    #[error("Invalid analysis configuration: {0}")]
    InvalidConfig(String),
}
