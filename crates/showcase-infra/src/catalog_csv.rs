//! CSV catalog import
//!
//! Expected header (column order is free, names are not):
//! id,brand,model,type,fuelType,engineCapacity,mileage,price,seatingCapacity,loadCapacity,imageId
//!
//! `loadCapacity` may be left empty for passenger vehicles.

use std::io::Read;

use showcase_types::Vehicle;

use crate::catalog_loader::CatalogLoadError;

pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<Vehicle>, CatalogLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut vehicles = Vec::new();
    for record in reader.deserialize() {
        let vehicle: Vehicle = record?;
        vehicles.push(vehicle);
    }
    Ok(vehicles)
}
