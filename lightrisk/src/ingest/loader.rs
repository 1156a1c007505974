//! Loaders for the analysis input files.

use std::path::Path;

use tracing::{info, warn};

use super::shape::{shape_location, shape_points};
use super::table::{read_table, read_table_with_fallback};
use super::IngestError;
use crate::config::DataSettings;
use crate::coord::{BoundingBox, GeoPoint};
use crate::records::{AnimalRecord, LightCategory, LightRecord};
use crate::spatial::{HabitatCategory, HabitatLayers};

/// Geometry column name in every shape export.
pub const SHAPE_COLUMN: &str = "SHAPE";

/// Latitude column of the mortality table.
pub const LATITUDE_COLUMN: &str = "decimalLatitude";

/// Longitude column of the mortality table.
pub const LONGITUDE_COLUMN: &str = "decimalLongitude";

/// Load every coordinate pair of a shape export as one point cloud.
///
/// Any failure (missing file, unreadable file, no `SHAPE` column, no
/// coordinates) yields `None`: a missing layer is optional input.
pub fn load_shape_cloud(path: &Path, label: &str) -> Option<Vec<GeoPoint>> {
    info!(layer = label, path = %path.display(), "Loading layer");

    let table = match read_table_with_fallback(path, SHAPE_COLUMN) {
        Ok(table) => table,
        Err(e) => {
            warn!(layer = label, "Layer unavailable: {}", e);
            return None;
        }
    };

    let points: Vec<GeoPoint> = table
        .values(SHAPE_COLUMN)?
        .flat_map(shape_points)
        .collect();

    if points.is_empty() {
        warn!(layer = label, "Layer has no coordinates");
        return None;
    }

    info!(layer = label, points = points.len(), "Layer loaded");
    Some(points)
}

/// Load light fixtures of one category.
///
/// Rows without a resolvable location are dropped. A missing or unreadable
/// file yields an empty set.
pub fn load_lights(path: &Path, category: LightCategory) -> Vec<LightRecord> {
    let table = match read_table_with_fallback(path, SHAPE_COLUMN) {
        Ok(table) => table,
        Err(e) => {
            warn!(category = %category, "Lights unavailable: {}", e);
            return Vec::new();
        }
    };

    let Some(shapes) = table.values(SHAPE_COLUMN) else {
        return Vec::new();
    };

    let lights: Vec<LightRecord> = shapes
        .filter_map(shape_location)
        .map(|location| LightRecord::new(location, category))
        .collect();

    let dropped = table.len() - lights.len();
    if dropped > 0 {
        warn!(category = %category, dropped, "Lights without location dropped");
    }
    info!(category = %category, lights = lights.len(), "Lights loaded");
    lights
}

/// Load the tab-separated mortality table, keeping records inside `bbox`.
///
/// Rows with missing or unparsable coordinates are dropped.
pub fn load_animals(path: &Path, bbox: &BoundingBox) -> Result<Vec<AnimalRecord>, IngestError> {
    let table = read_table(path, '\t')?;

    let missing = |column: &str| IngestError::MissingColumn {
        path: path.to_path_buf(),
        column: column.to_string(),
    };
    let lat_idx = table
        .column(LATITUDE_COLUMN)
        .ok_or_else(|| missing(LATITUDE_COLUMN))?;
    let lon_idx = table
        .column(LONGITUDE_COLUMN)
        .ok_or_else(|| missing(LONGITUDE_COLUMN))?;

    let animals: Vec<AnimalRecord> = table
        .rows()
        .filter_map(|row| {
            let lat: f64 = row[lat_idx].trim().parse().ok()?;
            let lon: f64 = row[lon_idx].trim().parse().ok()?;
            let point = GeoPoint::try_new(lat, lon).ok()?;
            bbox.contains(&point).then_some(AnimalRecord { location: point })
        })
        .collect();

    info!(
        total = table.len(),
        in_study_area = animals.len(),
        "Animals loaded: {}",
        animals.len()
    );
    Ok(animals)
}

/// Every input the analysis needs, loaded from one data directory.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub habitat: HabitatLayers,
    pub streets: Vec<GeoPoint>,
    pub acoustic: Vec<LightRecord>,
    pub silent: Vec<LightRecord>,
    pub animals: Vec<AnimalRecord>,
}

impl Dataset {
    /// Load all inputs described by `settings`.
    ///
    /// Habitat, street and light files are optional; the mortality table is
    /// required.
    pub fn load(settings: &DataSettings, bbox: &BoundingBox) -> Result<Self, IngestError> {
        info!(directory = %settings.directory.display(), "Loading environmental data");

        let mut habitat = HabitatLayers::new();
        for category in HabitatCategory::ALL {
            let path = settings.habitat_path(category);
            habitat.insert(category, load_shape_cloud(&path, category.label()));
        }

        let streets =
            load_shape_cloud(&settings.path(&settings.residential), "Residential Streets")
                .unwrap_or_default();

        let acoustic = load_lights(
            &settings.path(&settings.lights_acoustic),
            LightCategory::Acoustic,
        );
        let silent = load_lights(
            &settings.path(&settings.lights_silent),
            LightCategory::Silent,
        );
        let animals = load_animals(&settings.path(&settings.roadkill), bbox)?;

        Ok(Self {
            habitat,
            streets,
            acoustic,
            silent,
            animals,
        })
    }
}
