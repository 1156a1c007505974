//! Default values and constants for all configuration settings.

use std::path::PathBuf;

use super::settings::*;
use crate::coord::STUDY_AREA;
use crate::sweep::{
    DEFAULT_CHECK_DISTANCE_M, DEFAULT_SIGNIFICANCE_LEVEL, DEFAULT_STREET_BUFFER_M,
    DEFAULT_THRESHOLDS_M,
};

pub const DEFAULT_NATURE_FILE: &str = "nature.csv";
pub const DEFAULT_WATER_FILE: &str = "water.csv";
pub const DEFAULT_GREENBELT1_FILE: &str = "greenbelt1.csv";
pub const DEFAULT_GREENBELT2_FILE: &str = "greenbelt2.csv";
pub const DEFAULT_RESIDENTIAL_FILE: &str = "residential.csv";
pub const DEFAULT_LIGHTS_ACOUSTIC_FILE: &str = "lights_acoustic.csv";
pub const DEFAULT_LIGHTS_SILENT_FILE: &str = "lights_silent.csv";
pub const DEFAULT_ROADKILL_FILE: &str = "roadkill.csv";

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE: &str = "lightrisk.log";

impl Default for ConfigFile {
    fn default() -> Self {
        let config_dir = super::file::config_directory();

        Self {
            data: DataSettings {
                directory: PathBuf::from("."),
                nature: DEFAULT_NATURE_FILE.to_string(),
                water: DEFAULT_WATER_FILE.to_string(),
                greenbelt1: DEFAULT_GREENBELT1_FILE.to_string(),
                greenbelt2: DEFAULT_GREENBELT2_FILE.to_string(),
                residential: DEFAULT_RESIDENTIAL_FILE.to_string(),
                lights_acoustic: DEFAULT_LIGHTS_ACOUSTIC_FILE.to_string(),
                lights_silent: DEFAULT_LIGHTS_SILENT_FILE.to_string(),
                roadkill: DEFAULT_ROADKILL_FILE.to_string(),
            },
            analysis: AnalysisSettings {
                thresholds: DEFAULT_THRESHOLDS_M.to_vec(),
                check_distance: DEFAULT_CHECK_DISTANCE_M,
                street_buffer: DEFAULT_STREET_BUFFER_M,
                significance: DEFAULT_SIGNIFICANCE_LEVEL,
                parallel: false,
            },
            study_area: StudyAreaSettings {
                min_lat: STUDY_AREA.min_lat,
                max_lat: STUDY_AREA.max_lat,
                min_lon: STUDY_AREA.min_lon,
                max_lon: STUDY_AREA.max_lon,
            },
            logging: LoggingSettings {
                file: config_dir.join(DEFAULT_LOG_FILE),
            },
        }
    }
}
