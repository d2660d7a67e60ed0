//! Recommendation dialog state
//!
//! idle -> pending -> success | failure, and back to idle on start over.

use serde::Serialize;
use showcase_domain::model::Catalog;

use crate::{
    build_recommendation_prompt, parse_response, verify, AdvisorError, AiBackend, Recommendation,
    RecommendationRequest,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RecommendationState {
    Idle,
    Pending { preferences: String },
    Success(Recommendation),
    Failure { reason: String },
}

/// Single-shot recommendation effect
#[derive(Debug, Clone)]
pub struct RecommendationFlow {
    state: RecommendationState,
}

impl Default for RecommendationFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationFlow {
    pub fn new() -> Self {
        Self {
            state: RecommendationState::Idle,
        }
    }

    pub fn state(&self) -> &RecommendationState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, RecommendationState::Pending { .. })
    }

    /// Enter the pending state and return the request to send.
    ///
    /// Only allowed from idle; a finished round must be cleared with
    /// [`start_over`](Self::start_over) first.
    pub fn start(&mut self, preferences: &str, catalog: &Catalog) -> Result<RecommendationRequest, AdvisorError> {
        if self.state != RecommendationState::Idle {
            return Err(AdvisorError::Busy);
        }
        let request = RecommendationRequest::new(preferences, catalog)?;
        self.state = RecommendationState::Pending {
            preferences: request.preferences.clone(),
        };
        Ok(request)
    }

    /// Settle a pending request with the backend's raw answer
    pub fn complete(&mut self, raw: Result<String, AdvisorError>, catalog: &Catalog) -> &RecommendationState {
        if !self.is_pending() {
            tracing::warn!("ignoring advisor answer with no request pending");
            return &self.state;
        }

        let outcome = raw
            .and_then(|raw| parse_response(&raw))
            .and_then(|response| verify(response, catalog));

        self.state = match outcome {
            Ok(recommendation) => RecommendationState::Success(recommendation),
            Err(err) => {
                tracing::warn!(error = %err, "recommendation failed");
                RecommendationState::Failure {
                    reason: err.to_string(),
                }
            }
        };
        &self.state
    }

    /// Start, send and complete in one call
    pub fn run(
        &mut self,
        backend: &dyn AiBackend,
        catalog: &Catalog,
        preferences: &str,
    ) -> Result<&RecommendationState, AdvisorError> {
        let request = self.start(preferences, catalog)?;
        let raw = backend.send_prompt(&build_recommendation_prompt(&request));
        Ok(self.complete(raw, catalog))
    }

    /// Discard everything and return to idle
    pub fn start_over(&mut self) {
        self.state = RecommendationState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{catalog, CannedBackend};

    const SWIFT: &str = r#"{"recommendation": {"brand": "Maruti Suzuki", "model": "Swift", "reason": "Frugal and easy to park."}}"#;

    #[test]
    fn test_success_path() {
        let catalog = catalog();
        let mut flow = RecommendationFlow::new();

        flow.start("small city car", &catalog).unwrap();
        assert!(flow.is_pending());

        match flow.complete(Ok(SWIFT.to_string()), &catalog) {
            RecommendationState::Success(rec) => assert_eq!(rec.vehicle.id, "1"),
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[test]
    fn test_transport_failure_is_recoverable() {
        let catalog = catalog();
        let mut flow = RecommendationFlow::new();
        let backend = CannedBackend(Err(AdvisorError::Transport("timeout".to_string())));

        let state = flow.run(&backend, &catalog, "anything").unwrap();
        assert!(matches!(state, RecommendationState::Failure { reason } if reason.contains("timeout")));

        // A finished round blocks a new one until the user starts over.
        assert_eq!(flow.start("again", &catalog), Err(AdvisorError::Busy));
        flow.start_over();
        assert_eq!(flow.state(), &RecommendationState::Idle);
        assert!(flow.start("again", &catalog).is_ok());
    }

    #[test]
    fn test_unknown_vehicle_is_failure() {
        let catalog = catalog();
        let mut flow = RecommendationFlow::new();
        flow.start("luxury", &catalog).unwrap();

        let raw = r#"{"recommendation": {"brand": "Rolls", "model": "Royce", "reason": "Luxury."}}"#;
        assert!(matches!(
            flow.complete(Ok(raw.to_string()), &catalog),
            RecommendationState::Failure { .. }
        ));
    }

    #[test]
    fn test_empty_preferences_stay_idle() {
        let catalog = catalog();
        let mut flow = RecommendationFlow::new();
        assert_eq!(flow.start("", &catalog), Err(AdvisorError::EmptyPreferences));
        assert_eq!(flow.state(), &RecommendationState::Idle);
    }

    #[test]
    fn test_answer_without_request_is_ignored() {
        let catalog = catalog();
        let mut flow = RecommendationFlow::new();
        assert_eq!(flow.complete(Ok(SWIFT.to_string()), &catalog), &RecommendationState::Idle);
    }
}
