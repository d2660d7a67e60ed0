//! Read-only vehicle catalog

use std::collections::HashSet;

use showcase_types::{Error, Result, Vehicle, VehicleType};

use crate::model::VehicleFilter;

/// Ordered, immutable list of vehicles with unique ids.
///
/// Catalog order is meaningful: filtering and comparison both preserve it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and non-positive figures.
    pub fn new(vehicles: Vec<Vehicle>) -> Result<Self> {
        let mut ids = HashSet::new();
        for vehicle in &vehicles {
            if !ids.insert(vehicle.id.as_str()) {
                return Err(Error::Catalog(format!("Duplicate vehicle id: {}", vehicle.id)));
            }
            validate(vehicle)?;
        }
        Ok(Self { vehicles })
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Case-insensitive lookup by brand and model
    pub fn find_by_name(&self, brand: &str, model: &str) -> Option<&Vehicle> {
        let brand = brand.trim().to_lowercase();
        let model = model.trim().to_lowercase();
        self.vehicles
            .iter()
            .find(|v| v.brand.to_lowercase() == brand && v.model.to_lowercase() == model)
    }

    /// Map selection ids to catalog records.
    ///
    /// Result follows catalog order, not selection order. Ids with no
    /// catalog record are dropped.
    pub fn resolve(&self, ids: &[String]) -> Vec<&Vehicle> {
        for id in ids {
            if self.find(id).is_none() {
                tracing::debug!(id = %id, "dropping stale comparison id");
            }
        }
        self.vehicles
            .iter()
            .filter(|v| ids.iter().any(|id| *id == v.id))
            .collect()
    }

    /// Vehicles passing the filter, in catalog order
    pub fn filter(&self, filter: &VehicleFilter) -> Vec<&Vehicle> {
        self.vehicles.iter().filter(|v| filter.matches(v)).collect()
    }

    pub fn by_type(&self, vehicle_type: VehicleType) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| v.vehicle_type == vehicle_type)
            .collect()
    }

    /// Distinct brands, sorted
    pub fn brands(&self) -> Vec<&str> {
        let mut brands: Vec<&str> = self.vehicles.iter().map(|v| v.brand.as_str()).collect();
        brands.sort_unstable();
        brands.dedup();
        brands
    }

    /// Highest price in the catalog; the default price ceiling
    pub fn max_price(&self) -> f64 {
        self.vehicles.iter().map(|v| v.price).fold(0.0, f64::max)
    }

    /// Comma-joined "Brand Model" list offered to the advisor
    pub fn availability_list(&self) -> String {
        self.vehicles
            .iter()
            .map(Vehicle::display_name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn validate(vehicle: &Vehicle) -> Result<()> {
    let checks = [
        ("price", vehicle.price),
        ("mileage", vehicle.mileage),
        ("engineCapacity", vehicle.engine_capacity),
        ("seatingCapacity", vehicle.seating_capacity as f64),
    ];
    for (field, value) in checks {
        if !(value > 0.0) {
            return Err(Error::Catalog(format!(
                "Vehicle {}: {} must be positive (got {})",
                vehicle.id, field, value
            )));
        }
    }
    if let Some(load) = vehicle.load_capacity {
        if !(load > 0.0) {
            return Err(Error::Catalog(format!(
                "Vehicle {}: loadCapacity must be positive (got {})",
                vehicle.id, load
            )));
        }
    }
    Ok(())
}
