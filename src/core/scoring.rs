use serde_json::Value;
use crate::models::{Location, SurveyPreferences};
use crate::core::attributes::{as_level, as_text, contains_ignore_case, is_placeholder, is_unknown};
use crate::core::vocabulary::{busyness_level, lighting_term, power_points, power_table};

/// Points for a busyness level that exactly matches the answer
const BUSYNESS_MAX_POINTS: u64 = 3;

/// Points for a free-text dimension that matches
const TEXT_MATCH_POINTS: u32 = 2;

/// Score one dimension from the catalog value and the survey answer
///
/// Rules only see known catalog values and real answers; skipping unknowns
/// is done once, in [`score_dimension`].
pub type ScoreRule = fn(&Value, &str) -> u32;

/// A scored dimension: which survey answer drives which catalog attribute
#[derive(Debug, Clone, Copy)]
pub struct DimensionRule {
    pub preference: &'static str,
    pub attribute: &'static str,
    pub score: ScoreRule,
}

/// Dimensions scored for every recommendation
pub static DIMENSION_RULES: [DimensionRule; 5] = [
    DimensionRule { preference: "busyness", attribute: "busyness_estimate", score: score_busyness },
    DimensionRule { preference: "powerAccess", attribute: "power_options", score: score_power },
    DimensionRule { preference: "foodPreference", attribute: "nearby_food_drink_options", score: score_text_match },
    DimensionRule { preference: "noiseLevel", attribute: "noise_level", score: score_text_match },
    DimensionRule { preference: "lighting", attribute: "natural_lighting", score: score_lighting },
];

/// Busyness: 3 for an exact level, one point less per step away, floor 0
pub fn score_busyness(value: &Value, answer: &str) -> u32 {
    let (Some(desired), Some(level)) = (busyness_level(answer), as_level(value)) else {
        return 0;
    };
    let distance = level.abs_diff(desired);
    BUSYNESS_MAX_POINTS.saturating_sub(distance) as u32
}

/// Power access: importance selects a table, the exact catalog state picks the points
pub fn score_power(value: &Value, answer: &str) -> u32 {
    match (power_table(answer), value.as_str()) {
        (Some(table), Some(state)) => power_points(table, state),
        _ => 0,
    }
}

/// Free text: the answer appears somewhere in the catalog description
pub fn score_text_match(value: &Value, answer: &str) -> u32 {
    match as_text(value) {
        Some(text) if contains_ignore_case(&text, answer) => TEXT_MATCH_POINTS,
        _ => 0,
    }
}

/// Lighting: the answer is translated to the catalog's term before matching
pub fn score_lighting(value: &Value, answer: &str) -> u32 {
    match lighting_term(answer) {
        Some(term) => score_text_match(value, term),
        None => 0,
    }
}

/// Score a single dimension, treating missing data on either side as 0
#[inline]
pub fn score_dimension(rule: &DimensionRule, location: &Location, preferences: &SurveyPreferences) -> u32 {
    let Some(answer) = preferences.get(rule.preference) else {
        return 0;
    };
    if is_placeholder(answer) {
        return 0;
    }
    match location.get(rule.attribute) {
        Some(value) if !is_unknown(value) => (rule.score)(value, answer),
        _ => 0,
    }
}

/// Calculate the match score of a location against the standard dimensions
///
/// Each dimension contributes independently; the total is their sum.
pub fn calculate_match_score(location: &Location, preferences: &SurveyPreferences) -> u32 {
    score_with_rules(&DIMENSION_RULES, location, preferences)
}

/// Calculate the match score against an arbitrary rule table
pub fn score_with_rules(
    rules: &[DimensionRule],
    location: &Location,
    preferences: &SurveyPreferences,
) -> u32 {
    rules
        .iter()
        .map(|rule| score_dimension(rule, location, preferences))
        .sum()
}
