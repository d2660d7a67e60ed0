//! Wire format of the persisted comparison slot
//!
//! The slot holds a JSON array of vehicle id strings, at most
//! [`MAX_COMPARISON`] long, without duplicates.

use std::collections::HashSet;

/// Storage key of the comparison slot
pub const COMPARISON_KEY: &str = "vehicleComparison";

/// Maximum number of vehicles compared at once
pub const MAX_COMPARISON: usize = 4;

pub fn encode_selection(ids: &[String]) -> String {
    // Serializing a slice of strings cannot fail.
    serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a persisted slot value.
///
/// Anything that is not a valid selection (bad JSON, non-string items, more
/// than four ids, duplicates) decodes to an empty list.
pub fn decode_selection(raw: &str) -> Vec<String> {
    let ids: Vec<String> = match serde_json::from_str(raw) {
        Ok(ids) => ids,
        Err(e) => {
            tracing::warn!(error = %e, "persisted comparison list is malformed, ignoring");
            return Vec::new();
        }
    };

    if ids.len() > MAX_COMPARISON {
        tracing::warn!(len = ids.len(), "persisted comparison list exceeds capacity, ignoring");
        return Vec::new();
    }

    let mut seen = HashSet::new();
    if !ids.iter().all(|id| seen.insert(id.as_str())) {
        tracing::warn!("persisted comparison list contains duplicates, ignoring");
        return Vec::new();
    }

    ids
}
