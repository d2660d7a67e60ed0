//! Display formatting for vehicle attributes

use crate::{FuelType, Vehicle};

/// Group digits the Indian way: last three, then pairs ("5,00,000").
pub fn group_en_in(value: f64) -> String {
    let negative = value < 0.0;
    let value = value.abs();
    let cents_total = (value * 100.0).round() as u64;
    let whole = cents_total / 100;
    let cents = cents_total % 100;

    let digits = whole.to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if cents > 0 {
        let fraction = format!(".{:02}", cents);
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}

/// "₹ 5,00,000"
pub fn format_price(price: f64) -> String {
    format!("₹ {}", group_en_in(price))
}

/// "20 km/l" or "312 km/charge"
pub fn format_mileage(mileage: f64, fuel: FuelType) -> String {
    format!("{} {}", trim_number(mileage), fuel.mileage_unit())
}

pub fn format_engine(engine_capacity: f64) -> String {
    format!("{} cc", trim_number(engine_capacity))
}

pub fn format_seating(seats: u32) -> String {
    format!("{} Seater", seats)
}

/// "1,000 kg", or "N/A" when the vehicle carries no cargo
pub fn format_load(load: Option<f64>) -> String {
    match load {
        Some(kg) => format!("{} kg", group_en_in(kg)),
        None => "N/A".to_string(),
    }
}

/// Labelled attribute list for a single vehicle's detail view.
/// Load capacity is listed only when defined.
pub fn detail_specs(vehicle: &Vehicle) -> Vec<(&'static str, String)> {
    let mut specs = vec![
        ("Price", format_price(vehicle.price)),
        ("Engine", format_engine(vehicle.engine_capacity)),
        ("Mileage", format_mileage(vehicle.mileage, vehicle.fuel_type)),
        ("Fuel Type", vehicle.fuel_type.to_string()),
        ("Seating Capacity", format_seating(vehicle.seating_capacity)),
    ];
    if vehicle.load_capacity.is_some() {
        specs.push(("Load Capacity", format_load(vehicle.load_capacity)));
    }
    specs
}

fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_en_in() {
        assert_eq!(group_en_in(0.0), "0");
        assert_eq!(group_en_in(999.0), "999");
        assert_eq!(group_en_in(1000.0), "1,000");
        assert_eq!(group_en_in(500000.0), "5,00,000");
        assert_eq!(group_en_in(12345678.0), "1,23,45,678");
        assert_eq!(group_en_in(1500.5), "1,500.5");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(450000.0), "₹ 4,50,000");
    }

    #[test]
    fn test_format_mileage_unit_follows_fuel() {
        assert_eq!(format_mileage(20.0, FuelType::Petrol), "20 km/l");
        assert_eq!(format_mileage(312.0, FuelType::Electric), "312 km/charge");
        assert_eq!(format_mileage(26.5, FuelType::Cng), "26.5 km/l");
    }

    #[test]
    fn test_format_load() {
        assert_eq!(format_load(Some(1000.0)), "1,000 kg");
        assert_eq!(format_load(None), "N/A");
    }
}
