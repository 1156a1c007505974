//! Run command - load inputs, sweep habitat thresholds, print the results.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use lightrisk::analysis::run_from_config;
use lightrisk::config::ConfigFile;
use lightrisk::report::{render_table, render_tsv};
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Report layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Fixed-width results table
    #[default]
    Table,
    /// Tab-separated values with a header row
    Tsv,
}

/// Arguments for the run command.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Config file (default: ~/.lightrisk/config.ini)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the input files (overrides [data] directory)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Habitat threshold in meters; repeat to sweep several
    #[arg(long = "threshold", value_name = "METERS")]
    pub thresholds: Vec<f64>,

    /// Radius around exposed lights for counting deaths, in meters
    #[arg(long, value_name = "METERS")]
    pub check_distance: Option<f64>,

    /// Buffer around residential streets, in meters
    #[arg(long, value_name = "METERS")]
    pub street_buffer: Option<f64>,

    /// Evaluate thresholds in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output layout
    #[arg(long, value_enum, default_value = "table")]
    pub format: ReportFormat,

    /// Also write the report to this file
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl RunArgs {
    /// Fold command-line overrides into the loaded configuration.
    fn apply(&self, config: &mut ConfigFile) {
        if let Some(dir) = &self.data_dir {
            config.data.directory = dir.clone();
        }
        if !self.thresholds.is_empty() {
            config.analysis.thresholds = self.thresholds.clone();
        }
        if let Some(d) = self.check_distance {
            config.analysis.check_distance = d;
        }
        if let Some(b) = self.street_buffer {
            config.analysis.street_buffer = b;
        }
        if self.parallel {
            config.analysis.parallel = true;
        }
    }
}

/// Run the sensitivity sweep.
pub fn run(args: RunArgs) -> Result<(), CliError> {
    let mut runner = CliRunner::with_options(args.config.as_deref(), args.debug)?;
    runner.log_startup("run");

    args.apply(runner.config_mut());
    let config = runner.config();
    info!(
        "Data directory: {}, thresholds: {:?}",
        config.data.directory.display(),
        config.analysis.thresholds
    );

    let report = run_from_config(config)?;
    info!(
        "Sweep complete: {} of {} thresholds significant",
        report.significant_rows().count(),
        report.rows.len()
    );

    let rendered = match args.format {
        ReportFormat::Table => render_table(&report),
        ReportFormat::Tsv => render_tsv(&report),
    };
    print!("{}", rendered);

    if let Some(path) = &args.output {
        runner.save_output(path, &rendered)?;
    }

    Ok(())
}
