//! Advisor module - AI-backed vehicle recommendation
//!
//! One request, one response. The answer is only trusted once it names a
//! vehicle that exists in the catalog.

pub mod ai;
pub mod flow;

pub use ai::backend_impl::{AiBackend, CliAiBackend};
pub use ai::prompts::build_recommendation_prompt;
pub use flow::{RecommendationFlow, RecommendationState};

use serde::{Deserialize, Serialize};
use showcase_domain::model::Catalog;
use showcase_types::{Error, Vehicle};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdvisorError {
    #[error("Describe what you are looking for first")]
    EmptyPreferences,

    #[error("A recommendation is already in progress")]
    Busy,

    #[error("No advisor command configured. Set one with: vehicle-showcase config --set-advisor-command \"gemini -p\"")]
    NotConfigured,

    #[error("Invalid advisor command: {0}")]
    InvalidCommand(String),

    #[error("Advisor request failed: {0}")]
    Transport(String),

    #[error("Advisor returned an unreadable answer: {0}")]
    InvalidResponse(String),

    #[error("Advisor recommended {brand} {model}, which is not in the catalog")]
    UnknownVehicle { brand: String, model: String },
}

impl From<AdvisorError> for Error {
    fn from(err: AdvisorError) -> Self {
        Error::Recommendation(err.to_string())
    }
}

/// Advisor configuration
#[derive(Debug, Clone, Default)]
pub struct AdvisorConfig {
    pub command: Option<String>,
    pub model: Option<String>,
}

impl AdvisorConfig {
    pub fn with_command(mut self, command: Option<String>) -> Self {
        self.command = command.filter(|c| !c.trim().is_empty());
        self
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    /// Backend for this configuration
    pub fn backend(&self) -> Result<CliAiBackend, AdvisorError> {
        let command = self.command.as_ref().ok_or(AdvisorError::NotConfigured)?;
        Ok(CliAiBackend::new(command.clone()).with_model(self.model.clone()))
    }
}

/// What is sent to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    /// Free-text description of what the user wants
    pub preferences: String,
    /// Comma-joined "Brand Model" list the model must choose from
    pub available_vehicles: String,
}

impl RecommendationRequest {
    pub fn new(preferences: &str, catalog: &Catalog) -> Result<Self, AdvisorError> {
        if preferences.trim().is_empty() {
            return Err(AdvisorError::EmptyPreferences);
        }
        Ok(Self {
            preferences: preferences.to_string(),
            available_vehicles: catalog.availability_list(),
        })
    }
}

/// Model answer, as returned on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendation: RecommendedVehicle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedVehicle {
    pub brand: String,
    pub model: String,
    pub reason: String,
}

/// A verified recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub vehicle: Vehicle,
    pub reason: String,
}

/// Extract JSON from an AI response (handles markdown code blocks)
pub fn extract_json_from_response(response: &str) -> String {
    let response = response.trim();

    if response.starts_with("```") {
        if let Some(end) = response.rfind("```") {
            let start = response.find('\n').map(|i| i + 1).unwrap_or(response.len());
            if start < end {
                return response[start..end].trim().to_string();
            }
        }
    }

    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if start < end {
                return response[start..=end].to_string();
            }
        }
    }

    response.to_string()
}

pub fn parse_response(raw: &str) -> Result<RecommendationResponse, AdvisorError> {
    let json = extract_json_from_response(raw);
    serde_json::from_str(&json).map_err(|e| AdvisorError::InvalidResponse(e.to_string()))
}

/// Check the answer names a catalog vehicle, matching case-insensitively
pub fn verify(response: RecommendationResponse, catalog: &Catalog) -> Result<Recommendation, AdvisorError> {
    let RecommendedVehicle { brand, model, reason } = response.recommendation;
    match catalog.find_by_name(&brand, &model) {
        Some(vehicle) => Ok(Recommendation {
            vehicle: vehicle.clone(),
            reason,
        }),
        None => Err(AdvisorError::UnknownVehicle { brand, model }),
    }
}

/// Run one recommendation round-trip. No retry.
pub fn recommend(
    backend: &dyn AiBackend,
    catalog: &Catalog,
    preferences: &str,
) -> Result<Recommendation, AdvisorError> {
    let request = RecommendationRequest::new(preferences, catalog)?;
    let raw = backend.send_prompt(&build_recommendation_prompt(&request))?;
    verify(parse_response(&raw)?, catalog)
}


#[cfg(test)]
mod tests {
    use super::test_support::{catalog, CannedBackend};
    use super::*;

    #[test]
    fn test_extract_json_from_fenced_block() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json_from_response(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_json_from_prose() {
        let raw = "Sure! Here you go: {\"a\": {\"b\": 2}} Hope that helps.";
        assert_eq!(extract_json_from_response(raw), "{\"a\": {\"b\": 2}}");
    }

    #[test]
    fn test_recommend_verifies_case_insensitively() {
        let backend = CannedBackend(Ok(
            r#"{"recommendation": {"brand": "tata", "model": "NEXON EV", "reason": "Cheap to run."}}"#.to_string(),
        ));
        let rec = recommend(&backend, &catalog(), "low running cost").unwrap();
        assert_eq!(rec.vehicle.id, "2");
        assert_eq!(rec.reason, "Cheap to run.");
    }

    #[test]
    fn test_recommend_rejects_vehicle_outside_catalog() {
        let backend = CannedBackend(Ok(
            r#"{"recommendation": {"brand": "Tesla", "model": "Model 3", "reason": "Fast."}}"#.to_string(),
        ));
        let err = recommend(&backend, &catalog(), "fast").unwrap_err();
        assert_eq!(
            err,
            AdvisorError::UnknownVehicle {
                brand: "Tesla".to_string(),
                model: "Model 3".to_string()
            }
        );
    }

    #[test]
    fn test_recommend_rejects_garbage() {
        let backend = CannedBackend(Ok("I think you should buy a bicycle.".to_string()));
        assert!(matches!(
            recommend(&backend, &catalog(), "anything"),
            Err(AdvisorError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_empty_preferences_never_reach_backend() {
        let backend = CannedBackend(Err(AdvisorError::Transport("should not be called".to_string())));
        assert_eq!(
            recommend(&backend, &catalog(), "   ").unwrap_err(),
            AdvisorError::EmptyPreferences
        );
    }

    #[test]
    fn test_request_lists_catalog() {
        let request = RecommendationRequest::new("family car", &catalog()).unwrap();
        assert_eq!(request.available_vehicles, "Maruti Suzuki Swift, Tata Nexon EV");
    }

    #[test]
    fn test_config_without_command_is_not_configured() {
        let config = AdvisorConfig::default().with_command(Some(" ".to_string()));
        assert!(matches!(config.backend(), Err(AdvisorError::NotConfigured)));
    }
}
