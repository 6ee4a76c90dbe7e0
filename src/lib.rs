//! Study spot recommendation service
//!
//! Ranks study locations against survey preferences and stores star-rated
//! reviews for them. The scoring engine in [`core`] is pure and synchronous;
//! everything else adapts it to HTTP and storage.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{calculate_match_score, Matcher, MatchError, MatchResult};
pub use models::{Location, Review, ScoredLocation, SurveyPreferences};
