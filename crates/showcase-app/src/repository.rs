//! Repository adapters for persistence layer

use std::path::PathBuf;

use showcase_domain::model::Catalog;
use showcase_domain::repository::CatalogRepository;
use showcase_infra::persistence::{EmbeddedCatalogRepository, FileCatalogRepository};
use showcase_store::{FileStore, KeyValueStore, MemoryStore};
use showcase_types::Result;

use crate::config::Config;

/// Load the catalog named in the config, or the built-in one
pub fn open_catalog(config: &Config) -> Result<Catalog> {
    match config.catalog_path {
        Some(ref path) => open_catalog_at(path.clone()),
        None => EmbeddedCatalogRepository.load_catalog(),
    }
}

/// Load a catalog from a .toml or .csv file
pub fn open_catalog_at(path: PathBuf) -> Result<Catalog> {
    let repo = FileCatalogRepository::new(path)?;
    tracing::debug!(path = %repo.path().display(), "loading catalog");
    repo.load_catalog()
}

/// Open the store holding the comparison list.
///
/// Never fails: when the storage directory cannot be resolved or opened the
/// list lives in memory for this run only.
pub fn open_selection_store(config: &Config) -> Box<dyn KeyValueStore> {
    match config.storage_dir().and_then(FileStore::open) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "selection storage unavailable, keeping the list in memory");
            Box::new(MemoryStore::new())
        }
    }
}

/// Open the selection store at a custom directory
pub fn open_selection_store_at(store_dir: PathBuf) -> Result<FileStore> {
    FileStore::open(store_dir)
}
