//! Catalog compiled into the binary

use showcase_domain::repository::CatalogRepository;
use showcase_types::{Error, Vehicle};

use crate::catalog_loader::{load_from_toml_str, DEFAULT_CATALOG_TOML};

/// Repository over the built-in showcase catalog
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedCatalogRepository;

impl CatalogRepository for EmbeddedCatalogRepository {
    fn find_all(&self) -> Result<Vec<Vehicle>, Error> {
        load_from_toml_str(DEFAULT_CATALOG_TOML).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = EmbeddedCatalogRepository.load_catalog().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.vehicles().iter().any(|v| v.load_capacity.is_some()));
    }
}
