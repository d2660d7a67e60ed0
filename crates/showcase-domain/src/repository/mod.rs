//! Repository trait definitions for catalog access

use showcase_types::{Error, Vehicle};

use crate::model::Catalog;

/// Source of catalog records.
///
/// Implementations load once; the catalog is never written back.
pub trait CatalogRepository {
    /// All vehicles, in catalog order
    fn find_all(&self) -> Result<Vec<Vehicle>, Error>;

    /// Find a vehicle by id
    fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>, Error> {
        Ok(self.find_all()?.into_iter().find(|v| v.id == id))
    }

    /// Load and validate the full catalog
    fn load_catalog(&self) -> Result<Catalog, Error> {
        Catalog::new(self.find_all()?)
    }
}
