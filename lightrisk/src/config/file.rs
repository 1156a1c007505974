//! Configuration file handling for ~/.lightrisk/config.ini.
//!
//! Loads and saves user configuration with sensible defaults.
//! Settings structs live in [`super::settings`], constants in [`super::defaults`],
//! parsing in [`super::parser`], and serialization in [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::settings::ConfigFile;
use crate::coord::BoundingBox;
use crate::error::AnalysisError;
use crate::sweep::SweepConfig;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.lightrisk/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        std::fs::write(path, self.to_ini_string()).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Commented INI text for this configuration, as written by [`save_to`](Self::save_to).
    pub fn to_ini_string(&self) -> String {
        super::writer::to_config_string(self)
    }

    /// Sweep parameters from the `[analysis]` section, validated.
    pub fn to_sweep_config(&self) -> Result<SweepConfig, AnalysisError> {
        let config = SweepConfig {
            thresholds_m: self.analysis.thresholds.clone(),
            check_distance_m: self.analysis.check_distance,
            street_buffer_m: self.analysis.street_buffer,
            significance_level: self.analysis.significance,
            parallel: self.analysis.parallel,
        };
        config.validate()?;
        Ok(config)
    }

    /// Study area from the `[study_area]` section, validated.
    pub fn study_area(&self) -> Result<BoundingBox, AnalysisError> {
        let area = &self.study_area;
        BoundingBox::new(area.min_lat, area.max_lat, area.min_lon, area.max_lon)
            .map_err(|e| AnalysisError::InvalidConfig(format!("study_area: {}", e)))
    }
}

/// Get the path to the config directory (~/.lightrisk).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".lightrisk")
}

/// Get the path to the config file (~/.lightrisk/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}
