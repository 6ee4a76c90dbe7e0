use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::NewReview;

/// Request to create a review
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(range(min = 1, message = "Study spot ID must be a positive integer."))]
    #[serde(alias = "study_spot_id", rename = "studySpotId")]
    pub study_spot_id: i64,
    #[validate(custom(function = "not_blank", message = "Name cannot be empty."))]
    pub name: String,
    #[validate(range(min = 1, max = 5, message = "Stars must be an integer between 1 and 5."))]
    pub stars: i32,
    #[validate(custom(function = "not_blank", message = "Review text cannot be empty."))]
    pub review: String,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(req: CreateReviewRequest) -> Self {
        NewReview {
            study_spot_id: req.study_spot_id,
            name: req.name,
            stars: req.stars,
            review: req.review,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Query parameters for the recommendation endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendQuery {
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<usize>,
}

/// Query parameters for listing reviews
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewsQuery {
    #[serde(alias = "study_spot_id", rename = "studySpotId")]
    pub study_spot_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(study_spot_id: i64, name: &str, stars: i32, review: &str) -> CreateReviewRequest {
        CreateReviewRequest {
            study_spot_id,
            name: name.to_string(),
            stars,
            review: review.to_string(),
        }
    }

    #[test]
    fn test_valid_review() {
        assert!(request(1, "Ada", 5, "Quiet and bright").validate().is_ok());
        assert!(request(1, "Ada", 1, "Too loud").validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_spot() {
        let errors = request(0, "Ada", 3, "ok").validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
        assert!(request(-4, "Ada", 3, "ok").validate().is_err());
    }

    #[test]
    fn test_rejects_blank_text() {
        let errors = request(1, "   ", 3, "\t").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("review"));
    }

    #[test]
    fn test_rejects_out_of_range_stars() {
        assert!(request(1, "Ada", 0, "meh").validate().is_err());
        assert!(request(1, "Ada", 6, "wow").validate().is_err());
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(RecommendQuery { limit: Some(0) }.validate().is_err());
        assert!(RecommendQuery { limit: Some(3) }.validate().is_ok());
        assert!(RecommendQuery { limit: None }.validate().is_ok());
    }
}
