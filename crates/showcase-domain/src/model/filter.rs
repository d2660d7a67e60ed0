//! Catalog browsing filter

use serde::{Deserialize, Serialize};
use showcase_types::{FuelType, Vehicle, VehicleType};

/// Conjunction of catalog predicates. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleFilter {
    /// Case-insensitive substring of brand or model
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub vehicle_type: Option<VehicleType>,
    /// Exact brand name
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub fuel_type: Option<FuelType>,
    /// Inclusive upper price bound; the lower bound is always 0
    #[serde(default)]
    pub max_price: Option<f64>,
}

impl VehicleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle_type = Some(vehicle_type);
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_fuel(mut self, fuel_type: FuelType) -> Self {
        self.fuel_type = Some(fuel_type);
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        let search = self.search.to_lowercase();
        let search_match = search.is_empty()
            || vehicle.brand.to_lowercase().contains(&search)
            || vehicle.model.to_lowercase().contains(&search);
        let type_match = self.vehicle_type.map_or(true, |t| vehicle.vehicle_type == t);
        let brand_match = self.brand.as_deref().map_or(true, |b| vehicle.brand == b);
        let fuel_match = self.fuel_type.map_or(true, |f| vehicle.fuel_type == f);
        let price_match = vehicle.price >= 0.0 && self.max_price.map_or(true, |max| vehicle.price <= max);

        search_match && type_match && brand_match && fuel_match && price_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::named;

    #[test]
    fn test_empty_filter_matches_all() {
        let v = named("a", "Honda", "Activa", FuelType::Petrol, VehicleType::TwoWheeler, 80000.0);
        assert!(VehicleFilter::new().is_empty());
        assert!(VehicleFilter::new().matches(&v));
    }

    #[test]
    fn test_search_is_case_insensitive_on_brand_or_model() {
        let v = named("a", "Honda", "Activa", FuelType::Petrol, VehicleType::TwoWheeler, 80000.0);
        assert!(VehicleFilter::new().with_search("HON").matches(&v));
        assert!(VehicleFilter::new().with_search("tiv").matches(&v));
        assert!(!VehicleFilter::new().with_search("bajaj").matches(&v));
    }

    #[test]
    fn test_price_ceiling_is_inclusive() {
        let v = named("a", "Honda", "Activa", FuelType::Petrol, VehicleType::TwoWheeler, 80000.0);
        assert!(VehicleFilter::new().with_max_price(80000.0).matches(&v));
        assert!(!VehicleFilter::new().with_max_price(79999.0).matches(&v));
    }

    #[test]
    fn test_brand_is_exact() {
        let v = named("a", "Tata", "Ace", FuelType::Diesel, VehicleType::FourWheeler, 500000.0);
        assert!(VehicleFilter::new().with_brand("Tata").matches(&v));
        assert!(!VehicleFilter::new().with_brand("tata").matches(&v));
    }

    #[test]
    fn test_all_predicates_must_hold() {
        let v = named("a", "Tata", "Ace", FuelType::Diesel, VehicleType::FourWheeler, 500000.0);
        let filter = VehicleFilter::new()
            .with_search("ace")
            .with_type(VehicleType::FourWheeler)
            .with_fuel(FuelType::Electric);
        assert!(!filter.matches(&v));
    }
}
