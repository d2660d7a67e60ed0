//! Infrastructure layer - catalog loaders and repository implementations

pub mod catalog_csv;
pub mod catalog_loader;
pub mod persistence;
