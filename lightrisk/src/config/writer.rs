//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let thresholds = config
        .analysis
        .thresholds
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let parallel = if config.analysis.parallel {
        "true"
    } else {
        "false"
    };

    format!(
        r#"[data]
; Directory holding the input files. File names below are relative to it.
directory = {}
; Habitat layers (comma or semicolon separated, geometry in a SHAPE column).
; Missing layers are skipped, but at least one must be present.
nature = {}
water = {}
greenbelt1 = {}
greenbelt2 = {}
; Residential ("quiet") streets. Optional.
residential = {}
; Light fixtures with and without acoustic deterrent.
lights_acoustic = {}
lights_silent = {}
; Animal mortality records (tab separated, decimalLatitude/decimalLongitude).
roadkill = {}

[analysis]
; Habitat distance thresholds in meters, reported in this order.
thresholds = {}
; Radius in meters for associating a death with its nearest exposed light.
check_distance = {}
; Fixed quiet-street buffer in meters (not swept).
street_buffer = {}
; p-value below which a row is marked significant.
significance = {}
; Evaluate thresholds in parallel (results keep the order above).
parallel = {}

[study_area]
; Mortality records outside this box are ignored (decimal degrees, inclusive).
min_lat = {}
max_lat = {}
min_lon = {}
max_lon = {}

[logging]
; Log file, cleared at the start of every run.
file = {}
"#,
        path_to_string(&config.data.directory),
        config.data.nature,
        config.data.water,
        config.data.greenbelt1,
        config.data.greenbelt2,
        config.data.residential,
        config.data.lights_acoustic,
        config.data.lights_silent,
        config.data.roadkill,
        thresholds,
        config.analysis.check_distance,
        config.analysis.street_buffer,
        config.analysis.significance,
        parallel,
        config.study_area.min_lat,
        config.study_area.max_lat,
        config.study_area.min_lon,
        config.study_area.max_lon,
        path_to_string(&config.logging.file),
    )
}

fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_string_has_all_sections() {
        let content = to_config_string(&ConfigFile::default());
        for section in ["[data]", "[analysis]", "[study_area]", "[logging]"] {
            assert!(content.contains(section), "missing {}", section);
        }
        assert!(content.contains("thresholds = 250, 200, 150, 100, 50"));
        assert!(content.contains("check_distance = 50"));
        assert!(content.contains("min_lat = 48.12"));
    }

    #[test]
    fn test_written_config_parses_back() {
        let ini = ini::Ini::load_from_str(&to_config_string(&ConfigFile::default())).unwrap();
        let parsed = super::super::parser::parse_ini(&ini).unwrap();
        assert_eq!(parsed.analysis, ConfigFile::default().analysis);
        assert_eq!(parsed.study_area, ConfigFile::default().study_area);
        assert_eq!(parsed.data.roadkill, "roadkill.csv");
    }
}
