//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a distance or probability.
fn parse_f64(section: &str, key: &str, value: &str) -> Result<f64, ConfigFileError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(section, key, value, "must be a number"))
}

/// Parse a comma-separated list of meters, e.g. `250, 200, 150`.
fn parse_thresholds(value: &str) -> Result<Vec<f64>, ConfigFileError> {
    let reason = "expected a comma-separated list of positive meters, e.g. '250,200,150'";
    let thresholds = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v > 0.0)
                .ok_or_else(|| invalid("analysis", "thresholds", value, reason))
        })
        .collect::<Result<Vec<f64>, _>>()?;

    if thresholds.is_empty() {
        return Err(invalid("analysis", "thresholds", value, reason));
    }
    Ok(thresholds)
}

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [data] section
    if let Some(section) = ini.section(Some("data")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.data.directory = expand_tilde(v);
            }
        }
        let files: [(&str, &mut String); 8] = [
            ("nature", &mut config.data.nature),
            ("water", &mut config.data.water),
            ("greenbelt1", &mut config.data.greenbelt1),
            ("greenbelt2", &mut config.data.greenbelt2),
            ("residential", &mut config.data.residential),
            ("lights_acoustic", &mut config.data.lights_acoustic),
            ("lights_silent", &mut config.data.lights_silent),
            ("roadkill", &mut config.data.roadkill),
        ];
        for (key, field) in files {
            if let Some(v) = section.get(key) {
                let v = v.trim();
                if !v.is_empty() {
                    *field = v.to_string();
                }
            }
        }
    }

    // [analysis] section
    if let Some(section) = ini.section(Some("analysis")) {
        if let Some(v) = section.get("thresholds") {
            config.analysis.thresholds = parse_thresholds(v)?;
        }
        if let Some(v) = section.get("check_distance") {
            config.analysis.check_distance = parse_f64("analysis", "check_distance", v)?;
            if config.analysis.check_distance <= 0.0 {
                return Err(invalid("analysis", "check_distance", v, "must be positive"));
            }
        }
        if let Some(v) = section.get("street_buffer") {
            config.analysis.street_buffer = parse_f64("analysis", "street_buffer", v)?;
            if config.analysis.street_buffer <= 0.0 {
                return Err(invalid("analysis", "street_buffer", v, "must be positive"));
            }
        }
        if let Some(v) = section.get("significance") {
            let level = parse_f64("analysis", "significance", v)?;
            if !(level > 0.0 && level < 1.0) {
                return Err(invalid(
                    "analysis",
                    "significance",
                    v,
                    "must be between 0 and 1 (exclusive)",
                ));
            }
            config.analysis.significance = level;
        }
        if let Some(v) = section.get("parallel") {
            config.analysis.parallel = parse_bool(v);
        }
    }

    // [study_area] section
    if let Some(section) = ini.section(Some("study_area")) {
        let bounds: [(&str, &mut f64); 4] = [
            ("min_lat", &mut config.study_area.min_lat),
            ("max_lat", &mut config.study_area.max_lat),
            ("min_lon", &mut config.study_area.min_lon),
            ("max_lon", &mut config.study_area.max_lon),
        ];
        for (key, field) in bounds {
            if let Some(v) = section.get(key) {
                *field = parse_f64("study_area", key, v)?;
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

/// Parse a boolean config value.
pub(super) fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
