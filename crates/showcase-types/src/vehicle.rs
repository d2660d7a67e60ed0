//! Vehicle record and its enumerated attributes

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Vehicle category by wheel count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum VehicleType {
    #[serde(rename = "Two Wheeler")]
    TwoWheeler,
    #[serde(rename = "Three Wheeler")]
    ThreeWheeler,
    #[serde(rename = "Four Wheeler")]
    FourWheeler,
    #[serde(rename = "Six Wheeler")]
    SixWheeler,
}

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [
        VehicleType::TwoWheeler,
        VehicleType::ThreeWheeler,
        VehicleType::FourWheeler,
        VehicleType::SixWheeler,
    ];

    /// Display label for a single vehicle ("Two Wheeler")
    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::TwoWheeler => "Two Wheeler",
            VehicleType::ThreeWheeler => "Three Wheeler",
            VehicleType::FourWheeler => "Four Wheeler",
            VehicleType::SixWheeler => "Six Wheeler",
        }
    }

    /// Category heading ("Two Wheelers")
    pub fn category_label(&self) -> &'static str {
        match self {
            VehicleType::TwoWheeler => "Two Wheelers",
            VehicleType::ThreeWheeler => "Three Wheelers",
            VehicleType::FourWheeler => "Four Wheelers",
            VehicleType::SixWheeler => "Six Wheelers",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VehicleType::TwoWheeler => "Motorcycles and scooters for personal mobility.",
            VehicleType::ThreeWheeler => "Auto-rickshaws and cargo carriers for city transport.",
            VehicleType::FourWheeler => "A wide range of cars, from hatchbacks to SUVs.",
            VehicleType::SixWheeler => "Heavy-duty trucks and commercial vehicles.",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleType {
    type Err = String;

    /// Accepts the display label ("Two Wheeler", "two+wheeler") as used in
    /// category links.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().replace(['+', '-', '_'], " ").to_lowercase();
        VehicleType::ALL
            .into_iter()
            .find(|t| t.label().to_lowercase() == normalized)
            .ok_or_else(|| format!("Unknown vehicle type: {}", s))
    }
}

/// Fuel / energy source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    #[serde(rename = "CNG")]
    #[value(name = "cng")]
    Cng,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Petrol,
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Cng,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Cng => "CNG",
        }
    }

    /// Unit mileage is quoted in for this fuel
    pub fn mileage_unit(&self) -> &'static str {
        match self {
            FuelType::Electric => "km/charge",
            _ => "km/l",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        FuelType::ALL
            .into_iter()
            .find(|f| f.label().to_lowercase() == normalized)
            .ok_or_else(|| format!("Unknown fuel type: {}", s))
    }
}

/// Catalog vehicle record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Unique identifier within the catalog
    pub id: String,
    pub brand: String,
    pub model: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub fuel_type: FuelType,
    /// Engine displacement in cc
    pub engine_capacity: f64,
    /// km/l, or km/charge for electric vehicles
    pub mileage: f64,
    /// Price in INR
    pub price: f64,
    pub seating_capacity: u32,
    /// Payload in kg, cargo-capable vehicles only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_capacity: Option<f64>,
    /// Key into the external image asset table
    pub image_id: String,
}

impl Vehicle {
    /// "Brand Model" as shown in listings and the advisor availability list
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}
