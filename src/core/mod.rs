// Core algorithm exports
pub mod attributes;
pub mod matcher;
pub mod scoring;
pub mod vocabulary;

pub use matcher::{Matcher, MatchError, MatchResult, DEFAULT_LIMIT};
pub use scoring::{calculate_match_score, DimensionRule, ScoreRule, DIMENSION_RULES};
