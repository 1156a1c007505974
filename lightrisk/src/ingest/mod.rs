//! Input loading.
//!
//! Turns the raw exports into the point clouds and records consumed by the
//! analysis:
//!
//! | Input | Format | Missing file |
//! |-------|--------|--------------|
//! | habitat layers, residential streets | `,` or `;` separated, `SHAPE` column | layer omitted |
//! | acoustic / silent lights | `,` or `;` separated, `SHAPE` column | empty light set |
//! | animal mortality | tab separated, `decimalLatitude` / `decimalLongitude` | error |

mod loader;
mod shape;
mod table;

use std::path::PathBuf;

pub use loader::{
    load_animals, load_lights, load_shape_cloud, Dataset, LATITUDE_COLUMN, LONGITUDE_COLUMN,
    SHAPE_COLUMN,
};
pub use shape::{shape_location, shape_points};
pub use table::{read_table, read_table_with_fallback, Table};

/// Errors raised while reading input files.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: String },
}
