//! Side-by-side comparison scoring
//!
//! Each scored attribute awards one point to every vehicle holding the best
//! value for it. The vehicle with the most points is the recommended one.

use serde::Serialize;
use showcase_types::Vehicle;

/// Which end of an attribute's range wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    LowerIsBetter,
    HigherIsBetter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Price,
    Mileage,
    EngineCapacity,
    SeatingCapacity,
    LoadCapacity,
}

impl Attribute {
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Price => "Price",
            Attribute::Mileage => "Mileage",
            Attribute::EngineCapacity => "Engine Capacity",
            Attribute::SeatingCapacity => "Seating Capacity",
            Attribute::LoadCapacity => "Load Capacity",
        }
    }
}

/// One row of the scoring table
#[derive(Clone, Copy)]
pub struct ScoredAttribute {
    pub attribute: Attribute,
    pub direction: Direction,
    /// Value of the attribute, `None` when the vehicle does not define it
    pub value: fn(&Vehicle) -> Option<f64>,
    /// Whether the attribute takes part in this comparison at all
    pub applies: fn(&[&Vehicle]) -> bool,
}

impl std::fmt::Debug for ScoredAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoredAttribute")
            .field("attribute", &self.attribute)
            .field("direction", &self.direction)
            .finish()
    }
}

fn price(v: &Vehicle) -> Option<f64> {
    Some(v.price)
}

fn mileage(v: &Vehicle) -> Option<f64> {
    Some(v.mileage)
}

fn engine_capacity(v: &Vehicle) -> Option<f64> {
    Some(v.engine_capacity)
}

fn seating_capacity(v: &Vehicle) -> Option<f64> {
    Some(v.seating_capacity as f64)
}

fn load_capacity(v: &Vehicle) -> Option<f64> {
    v.load_capacity
}

fn always(_: &[&Vehicle]) -> bool {
    true
}

fn any_defines_load(vehicles: &[&Vehicle]) -> bool {
    vehicles.iter().any(|v| v.load_capacity.is_some())
}

/// Attributes scored by [`compare`], in evaluation order
pub const SCORED_ATTRIBUTES: [ScoredAttribute; 5] = [
    ScoredAttribute {
        attribute: Attribute::Price,
        direction: Direction::LowerIsBetter,
        value: price,
        applies: always,
    },
    ScoredAttribute {
        attribute: Attribute::Mileage,
        direction: Direction::HigherIsBetter,
        value: mileage,
        applies: always,
    },
    ScoredAttribute {
        attribute: Attribute::EngineCapacity,
        direction: Direction::HigherIsBetter,
        value: engine_capacity,
        applies: always,
    },
    ScoredAttribute {
        attribute: Attribute::SeatingCapacity,
        direction: Direction::HigherIsBetter,
        value: seating_capacity,
        applies: always,
    },
    ScoredAttribute {
        attribute: Attribute::LoadCapacity,
        direction: Direction::HigherIsBetter,
        value: load_capacity,
        applies: any_defines_load,
    },
];

/// Best-value flags for one scored attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeHighlight {
    pub attribute: Attribute,
    pub best_value: f64,
    /// Aligned with [`ComparisonResult::vehicle_ids`]
    pub best: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleScore {
    pub vehicle_id: String,
    pub score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Compared vehicles, in the order they were given
    pub vehicle_ids: Vec<String>,
    /// Only attributes that were actually scored
    pub highlights: Vec<AttributeHighlight>,
    /// Empty when fewer than two vehicles were compared
    pub scores: Vec<VehicleScore>,
    pub winner: Option<String>,
}

impl ComparisonResult {
    pub fn score(&self, vehicle_id: &str) -> Option<u32> {
        self.scores
            .iter()
            .find(|s| s.vehicle_id == vehicle_id)
            .map(|s| s.score)
    }

    pub fn is_best(&self, attribute: Attribute, vehicle_id: &str) -> bool {
        let Some(index) = self.vehicle_ids.iter().position(|id| id == vehicle_id) else {
            return false;
        };
        self.highlights
            .iter()
            .find(|h| h.attribute == attribute)
            .map(|h| h.best[index])
            .unwrap_or(false)
    }

    pub fn winner_score(&self) -> Option<u32> {
        self.winner.as_deref().and_then(|id| self.score(id))
    }
}

/// Flag every value equal to the best defined one.
///
/// With fewer than two defined values nothing is flagged.
pub fn highlight_best(values: &[Option<f64>], direction: Direction) -> Vec<bool> {
    let defined: Vec<f64> = values.iter().flatten().copied().collect();
    if defined.len() < 2 {
        return vec![false; values.len()];
    }

    let best = match direction {
        Direction::LowerIsBetter => defined.iter().copied().fold(f64::INFINITY, f64::min),
        Direction::HigherIsBetter => defined.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    };
    values.iter().map(|v| *v == Some(best)).collect()
}

/// Score vehicles against [`SCORED_ATTRIBUTES`]
pub fn compare(vehicles: &[&Vehicle]) -> ComparisonResult {
    compare_with(&SCORED_ATTRIBUTES, vehicles)
}

/// Score vehicles against an explicit attribute table.
///
/// The winner is the first vehicle, in input order, to strictly exceed the
/// running maximum score. There is no winner with fewer than two vehicles or
/// when no attribute had two comparable values.
pub fn compare_with(table: &[ScoredAttribute], vehicles: &[&Vehicle]) -> ComparisonResult {
    let vehicle_ids: Vec<String> = vehicles.iter().map(|v| v.id.clone()).collect();
    if vehicles.len() < 2 {
        return ComparisonResult {
            vehicle_ids,
            ..Default::default()
        };
    }

    let mut points = vec![0u32; vehicles.len()];
    let mut highlights = Vec::new();

    for row in table {
        if !(row.applies)(vehicles) {
            continue;
        }
        let values: Vec<Option<f64>> = vehicles.iter().map(|v| (row.value)(v)).collect();
        let best = highlight_best(&values, row.direction);
        let Some(index) = best.iter().position(|b| *b) else {
            continue;
        };
        let best_value = values[index].unwrap_or_default();

        for (point, is_best) in points.iter_mut().zip(&best) {
            if *is_best {
                *point += 1;
            }
        }
        highlights.push(AttributeHighlight {
            attribute: row.attribute,
            best_value,
            best,
        });
    }

    let winner = if highlights.is_empty() {
        None
    } else {
        let mut leader: Option<(usize, u32)> = None;
        for (i, score) in points.iter().copied().enumerate() {
            if leader.map_or(true, |(_, max)| score > max) {
                leader = Some((i, score));
            }
        }
        leader.map(|(i, _)| vehicle_ids[i].clone())
    };

    let scores = vehicle_ids
        .iter()
        .zip(points)
        .map(|(id, score)| VehicleScore {
            vehicle_id: id.clone(),
            score,
        })
        .collect();

    ComparisonResult {
        vehicle_ids,
        highlights,
        scores,
        winner,
    }
}
