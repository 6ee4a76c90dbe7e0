// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Location, NewReview, Review, ScoredLocation, SurveyPreferences};
pub use requests::{CreateReviewRequest, RecommendQuery, ReviewsQuery};
pub use responses::{
    CreateReviewResponse, ErrorResponse, HealthResponse, MessageResponse, RecommendResponse,
    ReviewsResponse, StudySpotsResponse,
};
