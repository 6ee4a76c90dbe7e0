use serde::{Deserialize, Serialize};
use crate::models::domain::{Location, Review, ScoredLocation};

/// Response for the catalog listing
#[derive(Debug, Clone, Serialize)]
pub struct StudySpotsResponse {
    pub study_spots: Vec<Location>,
}

/// Response for the recommendation endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub recommended_spots: Vec<ScoredLocation>,
}

/// Response for review listings
#[derive(Debug, Clone, Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<Review>,
}

/// Plain message response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create review response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewResponse {
    pub message: String,
    pub status: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
