//! Persistence implementations
//!
//! Repository implementations for the catalog sources.

mod embedded_catalog_repo;
mod file_catalog_repo;

pub use embedded_catalog_repo::EmbeddedCatalogRepository;
pub use file_catalog_repo::FileCatalogRepository;
