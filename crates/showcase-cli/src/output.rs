//! Output formatting module

use serde::Serialize;
use showcase_advisor::RecommendationState;
use showcase_app::app::{CategorySummary, ComparisonView, Notice, NoticeVariant};
use showcase_types::format::{detail_specs, format_mileage, format_price};
use showcase_types::{Result, Vehicle};

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

pub fn render_vehicle_table(vehicles: &[&Vehicle]) -> String {
    if vehicles.is_empty() {
        return "No vehicles found matching your criteria.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<28} {:<14} {:<9} {:>14} {:>14}\n",
        "ID", "Vehicle", "Type", "Fuel", "Price", "Mileage"
    ));
    out.push_str(&format!("{}\n", "-".repeat(88)));
    for v in vehicles {
        out.push_str(&format!(
            "{:<4} {:<28} {:<14} {:<9} {:>14} {:>14}\n",
            v.id,
            truncate(&v.display_name(), 28),
            v.vehicle_type.label(),
            v.fuel_type.label(),
            format_price(v.price),
            format_mileage(v.mileage, v.fuel_type),
        ));
    }
    out.push_str(&format!("\n{} vehicle(s)\n", vehicles.len()));
    out
}

pub fn render_vehicle_detail(vehicle: &Vehicle) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", vehicle.display_name()));
    out.push_str(&format!("{}\n", "=".repeat(vehicle.display_name().chars().count())));
    out.push_str(&format!("{:<18}{}\n", "Type:", vehicle.vehicle_type.label()));
    for (label, value) in detail_specs(vehicle) {
        out.push_str(&format!("{:<18}{}\n", format!("{}:", label), value));
    }
    out
}

pub fn render_categories(categories: &[CategorySummary]) -> String {
    let mut out = String::new();
    for c in categories {
        out.push_str(&format!("{} ({})\n  {}\n", c.label, c.count, c.description));
    }
    out
}

pub fn render_comparison(view: &ComparisonView) -> String {
    if view.vehicles.is_empty() {
        return "No vehicles selected for comparison. Add some with: vehicle-showcase compare add <id>\n"
            .to_string();
    }
    if !view.is_comparable() {
        return format!(
            "Only {} selected. Add at least one more vehicle to compare.\n",
            view.vehicles[0].display_name()
        );
    }

    const LABEL_WIDTH: usize = 18;
    const CELL_WIDTH: usize = 24;

    let mut out = String::new();
    out.push_str(&format!("{:<LABEL_WIDTH$}", "Specification"));
    for v in &view.vehicles {
        out.push_str(&format!("{:<CELL_WIDTH$}", truncate(&v.display_name(), CELL_WIDTH - 1)));
    }
    out.push('\n');
    out.push_str(&format!("{}\n", "-".repeat(LABEL_WIDTH + CELL_WIDTH * view.vehicles.len())));

    for row in &view.rows {
        out.push_str(&format!("{:<LABEL_WIDTH$}", row.label));
        for cell in &row.cells {
            let text = if cell.highlighted {
                format!("{} *", cell.text)
            } else {
                cell.text.clone()
            };
            out.push_str(&format!("{:<CELL_WIDTH$}", text));
        }
        out.push('\n');
    }

    out.push_str("\n* best in category\n");
    if let Some(ref summary) = view.summary {
        out.push_str(&format!("\nOur Recommendation\n{}\n", summary));
    }
    out
}

pub fn render_notice(notice: &Notice) -> String {
    let marker = match notice.variant {
        NoticeVariant::Default => "",
        NoticeVariant::Destructive => "! ",
    };
    format!("{}{}: {}\n", marker, notice.title, notice.description)
}

pub fn render_recommendation(state: &RecommendationState) -> String {
    match state {
        RecommendationState::Success(rec) => {
            let mut out = String::from("\nOur Recommendation For You\n");
            out.push_str(&render_vehicle_detail(&rec.vehicle));
            out.push_str(&format!("\nWhy: {}\n", rec.reason));
            out
        }
        RecommendationState::Failure { reason } => {
            format!("Could not get a recommendation: {}\n", reason)
        }
        RecommendationState::Idle | RecommendationState::Pending { .. } => {
            "No recommendation yet.\n".to_string()
        }
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_app::app::{compare_selection, NoticeKind};
    use showcase_domain::model::Catalog;
    use showcase_types::{FuelType, VehicleType};

    fn vehicle(id: &str, brand: &str, model: &str, price: f64, mileage: f64, engine: f64) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            brand: brand.to_string(),
            model: model.to_string(),
            vehicle_type: VehicleType::FourWheeler,
            fuel_type: FuelType::Petrol,
            engine_capacity: engine,
            mileage,
            price,
            seating_capacity: 5,
            load_capacity: None,
            image_id: id.to_string(),
        }
    }

    #[test]
    fn test_empty_table_message() {
        assert_eq!(render_vehicle_table(&[]), "No vehicles found matching your criteria.\n");
    }

    #[test]
    fn test_table_lists_vehicle() {
        let v = vehicle("1", "Maruti Suzuki", "Swift", 650000.0, 22.0, 1197.0);
        let table = render_vehicle_table(&[&v]);
        assert!(table.contains("Maruti Suzuki Swift"));
        assert!(table.contains("₹ 6,50,000"));
        assert!(table.contains("1 vehicle(s)"));
    }

    #[test]
    fn test_comparison_marks_best_and_summary() {
        let catalog = Catalog::new(vec![
            vehicle("1", "Alpha", "One", 500000.0, 20.0, 1200.0),
            vehicle("2", "Beta", "Two", 450000.0, 18.0, 1000.0),
        ])
        .unwrap();
        let view = compare_selection(&catalog, &["1".to_string(), "2".to_string()]);
        let text = render_comparison(&view);

        assert!(text.contains("₹ 4,50,000 *"));
        assert!(text.contains("The Alpha One scored highest"));
    }

    #[test]
    fn test_single_vehicle_comparison_hint() {
        let catalog = Catalog::new(vec![vehicle("1", "Alpha", "One", 1.0, 1.0, 1.0)]).unwrap();
        let view = compare_selection(&catalog, &["1".to_string()]);
        assert!(render_comparison(&view).starts_with("Only Alpha One selected"));
    }

    #[test]
    fn test_destructive_notice_is_marked() {
        let text = render_notice(&Notice::new(NoticeKind::ListFull));
        assert_eq!(
            text,
            "! Comparison list full: You can compare a maximum of 4 vehicles at a time.\n"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long vehicle name", 10), "a very ...");
    }
}
