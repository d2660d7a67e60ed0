//! Prompt templates for the recommendation backend

use crate::RecommendationRequest;

/// Build the recommendation prompt.
///
/// The model is told to pick exactly one vehicle from the availability list
/// and answer with a single JSON object.
pub fn build_recommendation_prompt(request: &RecommendationRequest) -> String {
    format!(
        r#"You are a vehicle recommendation expert. Your task is to recommend one vehicle from the list of available vehicles that best matches the user's preferences.

You must only choose a vehicle from this list: {available}

User Preferences: {preferences}

Analyze the preferences and select the best fit from the available vehicles. Provide the brand, model, and a brief reason for your choice.

Respond with JSON only, in exactly this shape:
{{"recommendation": {{"brand": "<brand from the list>", "model": "<model from the list>", "reason": "<one sentence>"}}}}"#,
        available = request.available_vehicles,
        preferences = request.preferences.trim(),
    )
}
