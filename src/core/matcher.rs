use thiserror::Error;
use crate::models::{Location, ScoredLocation, SurveyPreferences};
use crate::core::scoring::{score_with_rules, DimensionRule, DIMENSION_RULES};

/// Number of recommendations returned when the caller does not ask otherwise
pub const DEFAULT_LIMIT: usize = 5;

/// Errors raised before any scoring happens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("No study spots available to recommend.")]
    EmptyCatalog,

    #[error("Missing survey preferences in request body.")]
    EmptyPreferences,
}

/// Result of the ranking process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredLocation>,
    pub total_candidates: usize,
}

/// Ranks catalog locations against survey preferences
///
/// # Pipeline Stages
/// 1. Reject empty input
/// 2. Score every location against each dimension rule
/// 3. Stable sort by descending score, so ties keep catalog order
/// 4. Truncate to the requested limit
#[derive(Debug, Clone)]
pub struct Matcher {
    rules: Vec<DimensionRule>,
}

impl Matcher {
    pub fn new(rules: Vec<DimensionRule>) -> Self {
        Self { rules }
    }

    pub fn with_default_rules() -> Self {
        Self::new(DIMENSION_RULES.to_vec())
    }

    pub fn rules(&self) -> &[DimensionRule] {
        &self.rules
    }

    /// Match score of a single location
    pub fn score(&self, location: &Location, preferences: &SurveyPreferences) -> u32 {
        score_with_rules(&self.rules, location, preferences)
    }

    /// Rank locations for a set of survey preferences
    ///
    /// # Arguments
    /// * `locations` - The full catalog snapshot, left untouched
    /// * `preferences` - The survey answers for this request
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// MatchResult with at most `limit` scored locations, best first
    pub fn rank(
        &self,
        locations: &[Location],
        preferences: &SurveyPreferences,
        limit: usize,
    ) -> Result<MatchResult, MatchError> {
        if preferences.is_empty() {
            return Err(MatchError::EmptyPreferences);
        }
        if locations.is_empty() {
            return Err(MatchError::EmptyCatalog);
        }

        let mut scored: Vec<ScoredLocation> = locations
            .iter()
            .map(|location| {
                let score = self.score(location, preferences);
                ScoredLocation::new(location.clone(), score)
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        scored.truncate(limit);

        tracing::debug!(
            "Ranked {} locations, returning {}",
            locations.len(),
            scored.len()
        );

        Ok(MatchResult {
            matches: scored,
            total_candidates: locations.len(),
        })
    }

    /// Rank with the default limit of five
    pub fn recommend(
        &self,
        locations: &[Location],
        preferences: &SurveyPreferences,
    ) -> Result<MatchResult, MatchError> {
        self.rank(locations, preferences, DEFAULT_LIMIT)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_location(id: i64, busyness: i64) -> Location {
        Location::default()
            .with("id", id)
            .with("name", format!("Spot {}", id))
            .with("busyness_estimate", busyness)
    }

    fn quiet() -> SurveyPreferences {
        serde_json::from_value(json!({ "busyness": "quiet" })).unwrap()
    }

    #[test]
    fn test_rank_by_busyness() {
        let matcher = Matcher::default();
        let catalog = vec![create_location(1, 2), create_location(2, 4), create_location(3, 1)];

        let result = matcher.rank(&catalog, &quiet(), 5).unwrap();

        let ids: Vec<i64> = result.matches.iter().filter_map(|m| m.location.id()).collect();
        let scores: Vec<u32> = result.matches.iter().map(|m| m.match_score).collect();
        assert_eq!(ids, vec![1, 3, 2]);
        assert_eq!(scores, vec![3, 2, 1]);
        assert_eq!(result.total_candidates, 3);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let matcher = Matcher::default();
        let catalog: Vec<Location> = (1..=6).map(|id| create_location(id, 3)).collect();

        let result = matcher.rank(&catalog, &quiet(), 10).unwrap();

        let ids: Vec<i64> = result.matches.iter().filter_map(|m| m.location.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::default();
        let catalog: Vec<Location> = (0..20).map(|id| create_location(id, 1 + id % 5)).collect();

        let result = matcher.recommend(&catalog, &quiet()).unwrap();

        assert_eq!(result.matches.len(), DEFAULT_LIMIT);
        assert!(result
            .matches
            .windows(2)
            .all(|pair| pair[0].match_score >= pair[1].match_score));
    }

    #[test]
    fn test_catalog_not_mutated() {
        let matcher = Matcher::default();
        let catalog = vec![create_location(1, 2)];
        let snapshot = catalog.clone();

        matcher.rank(&catalog, &quiet(), 5).unwrap();

        assert_eq!(catalog, snapshot);
        assert!(catalog[0].get("match_score").is_none());
    }

    #[test]
    fn test_empty_input_errors() {
        let matcher = Matcher::default();

        assert_eq!(
            matcher.rank(&[], &quiet(), 5).unwrap_err(),
            MatchError::EmptyCatalog
        );
        assert_eq!(
            matcher
                .rank(&[create_location(1, 2)], &SurveyPreferences::default(), 5)
                .unwrap_err(),
            MatchError::EmptyPreferences
        );
    }
}
