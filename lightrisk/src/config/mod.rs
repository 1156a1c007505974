//! Configuration for LightRisk.
//!
//! The INI file at `~/.lightrisk/config.ini` has four sections:
//!
//! - `[data]` - input directory and file names
//! - `[analysis]` - habitat thresholds, check distance, street buffer, significance
//! - `[study_area]` - bounding box applied to mortality records
//! - `[logging]` - log file location
//!
//! Missing keys fall back to the defaults in [`defaults`].
//!
//! # Example
//!
//! ```
//! use lightrisk::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! let sweep = config.to_sweep_config().unwrap();
//! assert_eq!(sweep.thresholds_m, vec![250.0, 200.0, 150.0, 100.0, 50.0]);
//! ```

pub mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{AnalysisSettings, ConfigFile, DataSettings, LoggingSettings, StudyAreaSettings};
