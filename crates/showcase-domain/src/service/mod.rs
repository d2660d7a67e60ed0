//! Domain services

pub mod comparison;
pub mod spec_sheet;

pub use comparison::{
    compare, compare_with, highlight_best, Attribute, AttributeHighlight, ComparisonResult,
    Direction, ScoredAttribute, VehicleScore, SCORED_ATTRIBUTES,
};
pub use spec_sheet::{comparison_rows, winner_summary, SpecCell, SpecRow};
