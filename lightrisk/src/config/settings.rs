//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::spatial::HabitatCategory;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Input file locations
    pub data: DataSettings,
    /// Sweep parameters
    pub analysis: AnalysisSettings,
    /// Bounding box for the mortality records
    pub study_area: StudyAreaSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Input file locations.
///
/// File names are resolved relative to `directory` unless absolute.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSettings {
    /// Directory holding the input files
    pub directory: PathBuf,
    /// Nature reserve shapes
    pub nature: String,
    /// Standing water shapes
    pub water: String,
    /// First greenbelt layer
    pub greenbelt1: String,
    /// Second greenbelt layer
    pub greenbelt2: String,
    /// Residential street shapes
    pub residential: String,
    /// Lights with acoustic deterrent
    pub lights_acoustic: String,
    /// Lights without deterrent
    pub lights_silent: String,
    /// Tab-separated animal mortality records
    pub roadkill: String,
}

impl DataSettings {
    /// Resolve a file name against the data directory.
    pub fn path(&self, file: &str) -> PathBuf {
        self.directory.join(file)
    }

    /// Path of a habitat layer file.
    pub fn habitat_path(&self, category: HabitatCategory) -> PathBuf {
        let file = match category {
            HabitatCategory::NatureReserve => &self.nature,
            HabitatCategory::StandingWater => &self.water,
            HabitatCategory::GreenBelt1 => &self.greenbelt1,
            HabitatCategory::GreenBelt2 => &self.greenbelt2,
        };
        self.path(file)
    }
}

/// Sweep parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    /// Habitat thresholds in meters, in report order
    pub thresholds: Vec<f64>,
    /// Death association radius in meters
    pub check_distance: f64,
    /// Quiet-street buffer in meters
    pub street_buffer: f64,
    /// Significance level
    pub significance: f64,
    /// Evaluate thresholds in parallel
    pub parallel: bool,
}

/// Study area bounding box in decimal degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyAreaSettings {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
