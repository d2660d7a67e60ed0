//! Catalog loader for TOML and CSV files

use std::fs;
use std::path::Path;

use serde::Deserialize;
use showcase_types::{Error, Vehicle};
use thiserror::Error;

use crate::catalog_csv;

/// Built-in catalog shipped with the binary
pub const DEFAULT_CATALOG_TOML: &str = include_str!("../data/default_catalog.toml");

#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse catalog TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Failed to parse catalog CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unsupported catalog format: {0} (expected .toml or .csv)")]
    UnsupportedFormat(String),
}

impl From<CatalogLoadError> for Error {
    fn from(err: CatalogLoadError) -> Self {
        Error::Catalog(err.to_string())
    }
}

/// Container for parsing catalog TOML
#[derive(Debug, Deserialize)]
struct CatalogFile {
    vehicles: Vec<Vehicle>,
}

/// Load vehicles from a TOML string with a `[[vehicles]]` array
pub fn load_from_toml_str(content: &str) -> Result<Vec<Vehicle>, CatalogLoadError> {
    let file: CatalogFile = toml::from_str(content)?;
    Ok(file.vehicles)
}

/// Load vehicles from a file, picking the parser by extension
pub fn load_from_file(path: &Path) -> Result<Vec<Vehicle>, CatalogLoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    tracing::debug!(path = %path.display(), "loading catalog");
    match extension.as_str() {
        "toml" => load_from_toml_str(&fs::read_to_string(path)?),
        "csv" => catalog_csv::load_from_reader(fs::File::open(path)?),
        other => Err(CatalogLoadError::UnsupportedFormat(other.to_string())),
    }
}
