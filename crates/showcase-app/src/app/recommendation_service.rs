//! Recommendation use case

use showcase_advisor::{AdvisorError, AiBackend, RecommendationFlow, RecommendationState};
use showcase_domain::model::Catalog;

use crate::config::Config;

/// Ask the configured advisor for one recommendation.
///
/// Backend and answer problems end in [`RecommendationState::Failure`];
/// only input problems (empty preferences, no advisor configured) are errors.
pub fn run_recommendation(
    config: &Config,
    catalog: &Catalog,
    preferences: &str,
) -> Result<RecommendationState, AdvisorError> {
    let backend = config.advisor().backend()?;
    run_with_backend(&backend, catalog, preferences)
}

pub fn run_with_backend(
    backend: &dyn AiBackend,
    catalog: &Catalog,
    preferences: &str,
) -> Result<RecommendationState, AdvisorError> {
    let mut flow = RecommendationFlow::new();
    let state = flow.run(backend, catalog, preferences)?;
    Ok(state.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_infra::persistence::EmbeddedCatalogRepository;
    use showcase_domain::repository::CatalogRepository;

    struct Fixed(String);

    impl AiBackend for Fixed {
        fn send_prompt(&self, prompt: &str) -> Result<String, AdvisorError> {
            assert!(prompt.contains("User Preferences: electric family car"));
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_unconfigured_advisor_is_error() {
        let catalog = EmbeddedCatalogRepository.load_catalog().unwrap();
        assert_eq!(
            run_recommendation(&Config::default(), &catalog, "anything"),
            Err(AdvisorError::NotConfigured)
        );
    }

    #[test]
    fn test_answer_is_matched_against_catalog() {
        let catalog = EmbeddedCatalogRepository.load_catalog().unwrap();
        let first = &catalog.vehicles()[0];
        let answer = format!(
            r#"```json
{{"recommendation": {{"brand": "{}", "model": "{}", "reason": "Fits."}}}}
```"#,
            first.brand, first.model
        );
        let backend = Fixed(answer);

        match run_with_backend(&backend, &catalog, "electric family car").unwrap() {
            RecommendationState::Success(rec) => assert_eq!(rec.vehicle.id, first.id),
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[test]
    fn test_bad_answer_is_failure_state() {
        let catalog = EmbeddedCatalogRepository.load_catalog().unwrap();
        let state = run_with_backend(&Fixed("no idea".to_string()), &catalog, "electric family car").unwrap();
        assert!(matches!(state, RecommendationState::Failure { .. }));
    }
}
