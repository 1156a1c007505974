//! End-to-end analysis facade.
//!
//! Wires ingestion, index construction and the sensitivity sweep together:
//!
//! ```text
//! ConfigFile ─► Dataset::load ─► HabitatIndex / StreetIndex ─► SensitivityEngine::run ─► SweepReport
//! ```

use tracing::info;

use crate::config::ConfigFile;
use crate::error::AnalysisError;
use crate::ingest::Dataset;
use crate::spatial::{HabitatIndex, StreetIndex};
use crate::sweep::{SensitivityEngine, SweepConfig, SweepReport};

/// Build the indexes for `dataset` and run the sweep.
///
/// Fails only when no habitat layer is available or `sweep` is invalid.
pub fn run_sweep(dataset: &Dataset, sweep: SweepConfig) -> Result<SweepReport, AnalysisError> {
    let habitat = HabitatIndex::build(&dataset.habitat)?;
    let street = StreetIndex::build(&dataset.streets);
    let engine = SensitivityEngine::new(sweep, habitat, street)?;
    Ok(engine.run(&dataset.acoustic, &dataset.silent, &dataset.animals))
}

/// Load inputs as described by `config` and run the sweep.
pub fn run_from_config(config: &ConfigFile) -> Result<SweepReport, AnalysisError> {
    let sweep = config.to_sweep_config()?;
    let study_area = config.study_area()?;

    let dataset = Dataset::load(&config.data, &study_area)?;
    info!(
        habitat_points = dataset.habitat.point_count(),
        street_points = dataset.streets.len(),
        acoustic = dataset.acoustic.len(),
        silent = dataset.silent.len(),
        animals = dataset.animals.len(),
        "Dataset loaded"
    );

    run_sweep(&dataset, sweep)
}
