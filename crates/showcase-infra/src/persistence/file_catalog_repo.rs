//! File-based implementation of CatalogRepository

use std::path::{Path, PathBuf};

use showcase_domain::repository::CatalogRepository;
use showcase_types::{Error, Vehicle};

use crate::catalog_loader;

/// Catalog read from a TOML or CSV file
pub struct FileCatalogRepository {
    path: PathBuf,
    vehicles: Vec<Vehicle>,
}

impl FileCatalogRepository {
    /// Read the catalog file eagerly
    pub fn new(path: PathBuf) -> Result<Self, Error> {
        let vehicles = catalog_loader::load_from_file(&path)?;
        Ok(Self { path, vehicles })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogRepository for FileCatalogRepository {
    fn find_all(&self) -> Result<Vec<Vehicle>, Error> {
        Ok(self.vehicles.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_csv_catalog_repo() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fleet.csv");
        fs::write(
            &path,
            "id,brand,model,type,fuelType,engineCapacity,mileage,price,seatingCapacity,loadCapacity,imageId\n\
             t1,Tata,Ace Gold,Four Wheeler,Diesel,702,22,540000,2,900,tata-ace\n",
        )
        .unwrap();

        let repo = FileCatalogRepository::new(path).unwrap();
        assert_eq!(repo.find_all().unwrap().len(), 1);
        assert!(repo.find_by_id("t1").unwrap().is_some());
        assert!(repo.find_by_id("nope").unwrap().is_none());
    }

    #[test]
    fn test_missing_file_is_catalog_error() {
        let dir = tempdir().unwrap();
        let result = FileCatalogRepository::new(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Catalog(_))));
    }
}
