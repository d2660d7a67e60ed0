use showcase_types::{FuelType, Vehicle, VehicleType};

pub fn vehicle(id: &str, price: f64, mileage: f64, engine: f64, seats: u32) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        brand: "Brand".to_string(),
        model: id.to_string(),
        vehicle_type: VehicleType::FourWheeler,
        fuel_type: FuelType::Petrol,
        engine_capacity: engine,
        mileage,
        price,
        seating_capacity: seats,
        load_capacity: None,
        image_id: format!("{}-image", id),
    }
}

pub fn named(id: &str, brand: &str, model: &str, fuel: FuelType, vehicle_type: VehicleType, price: f64) -> Vehicle {
    Vehicle {
        brand: brand.to_string(),
        model: model.to_string(),
        fuel_type: fuel,
        vehicle_type,
        ..vehicle(id, price, 20.0, 1000.0, 4)
    }
}
