//! Read-only catalog queries

use serde::Serialize;
use showcase_domain::model::Catalog;
use showcase_domain::service::{comparison_rows, compare, winner_summary, ComparisonResult, SpecRow};
use showcase_types::{Vehicle, VehicleType};

/// One browse category with its vehicle count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub vehicle_type: VehicleType,
    pub label: &'static str,
    pub description: &'static str,
    pub count: usize,
}

pub fn categories(catalog: &Catalog) -> Vec<CategorySummary> {
    VehicleType::ALL
        .iter()
        .map(|&vehicle_type| CategorySummary {
            vehicle_type,
            label: vehicle_type.category_label(),
            description: vehicle_type.description(),
            count: catalog.by_type(vehicle_type).len(),
        })
        .collect()
}

/// Everything needed to render the comparison page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    /// Resolved vehicles, in catalog order
    pub vehicles: Vec<Vehicle>,
    pub result: ComparisonResult,
    pub rows: Vec<SpecRow>,
    /// "The X scored highest..." line, when there is a winner
    pub summary: Option<String>,
}

impl ComparisonView {
    pub fn winner(&self) -> Option<&Vehicle> {
        let id = self.result.winner.as_deref()?;
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// At least two vehicles are needed for a side-by-side view
    pub fn is_comparable(&self) -> bool {
        self.vehicles.len() >= 2
    }
}

/// Resolve the selected ids against the catalog and score them.
///
/// Ids no longer in the catalog are dropped silently.
pub fn compare_selection(catalog: &Catalog, ids: &[String]) -> ComparisonView {
    let vehicles = catalog.resolve(ids);
    let result = compare(&vehicles);
    let rows = if vehicles.len() >= 2 {
        comparison_rows(&vehicles, &result)
    } else {
        Vec::new()
    };
    let summary = result.winner.as_deref().and_then(|id| {
        let vehicle = vehicles.iter().find(|v| v.id == id)?;
        Some(winner_summary(vehicle, result.score(id)?))
    });

    ComparisonView {
        vehicles: vehicles.into_iter().cloned().collect(),
        result,
        rows,
        summary,
    }
}
