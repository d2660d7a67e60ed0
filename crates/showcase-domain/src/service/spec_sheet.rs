//! Comparison table rows for display

use serde::Serialize;
use showcase_types::format::{format_engine, format_load, format_mileage, format_price, format_seating};
use showcase_types::Vehicle;

use crate::service::comparison::{Attribute, ComparisonResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecCell {
    pub text: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecRow {
    pub label: &'static str,
    /// One cell per compared vehicle
    pub cells: Vec<SpecCell>,
}

/// Build the side-by-side spec table.
///
/// The load capacity row appears only when a compared vehicle carries cargo.
/// Fuel type is informational and never highlighted.
pub fn comparison_rows(vehicles: &[&Vehicle], result: &ComparisonResult) -> Vec<SpecRow> {
    let numeric_row = |attribute: Attribute, text: &dyn Fn(&Vehicle) -> String| SpecRow {
        label: attribute.label(),
        cells: vehicles
            .iter()
            .map(|v| SpecCell {
                text: text(v),
                highlighted: result.is_best(attribute, &v.id),
            })
            .collect(),
    };

    let mut rows = vec![
        numeric_row(Attribute::Price, &|v| format_price(v.price)),
        numeric_row(Attribute::Mileage, &|v| format_mileage(v.mileage, v.fuel_type)),
        numeric_row(Attribute::EngineCapacity, &|v| format_engine(v.engine_capacity)),
        SpecRow {
            label: "Fuel Type",
            cells: vehicles
                .iter()
                .map(|v| SpecCell {
                    text: v.fuel_type.to_string(),
                    highlighted: false,
                })
                .collect(),
        },
        numeric_row(Attribute::SeatingCapacity, &|v| format_seating(v.seating_capacity)),
    ];

    if vehicles.iter().any(|v| v.load_capacity.is_some()) {
        rows.push(numeric_row(Attribute::LoadCapacity, &|v| format_load(v.load_capacity)));
    }

    rows
}

/// One-line explanation shown under the recommended vehicle
pub fn winner_summary(vehicle: &Vehicle, score: u32) -> String {
    format!(
        "The {} scored highest in our comparison, excelling in {} categories.",
        vehicle.display_name(),
        score
    )
}
