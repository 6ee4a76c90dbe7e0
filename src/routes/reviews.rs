use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::error::ApiError;
use crate::models::{CreateReviewRequest, CreateReviewResponse, ReviewsQuery, ReviewsResponse};
use crate::routes::AppState;

/// Configure all review routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/reviews", web::post().to(create_review))
        .route("/reviews", web::get().to(list_reviews))
        .route("/reviews/{study_spot_id}", web::get().to(list_reviews_for_spot));
}

/// Create a review for a study spot
///
/// POST /reviews
///
/// Request body:
/// ```json
/// {
///   "studySpotId": 1,
///   "name": "string",
///   "stars": 5,
///   "review": "string"
/// }
/// ```
async fn create_review(
    state: web::Data<AppState>,
    req: web::Json<CreateReviewRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Rejected review for study spot {}: {}", req.study_spot_id, errors);
        return Err(errors.into());
    }

    let study_spot_id = req.study_spot_id;
    match state.reviews.insert_review(req.into_inner().into()).await {
        Ok(review) => {
            tracing::info!("Stored review {} for study spot {}", review.id, study_spot_id);
            Ok(HttpResponse::Created().json(CreateReviewResponse {
                message: "Review added successfully".to_string(),
                status: "success".to_string(),
            }))
        }
        Err(e) => {
            tracing::error!("Failed to save review for study spot {}: {}", study_spot_id, e);
            Err(ApiError::Internal("Failed to save review".to_string()))
        }
    }
}

/// GET /reviews?studySpotId={id}
///
/// Without a study spot (or with 0) every review is returned.
async fn list_reviews(
    state: web::Data<AppState>,
    query: web::Query<ReviewsQuery>,
) -> Result<HttpResponse, ApiError> {
    let study_spot_id = match query.study_spot_id {
        None | Some(0) => None,
        Some(id) => Some(positive_spot_id(id)?),
    };

    let reviews = state.reviews.list_reviews(study_spot_id).await;
    Ok(HttpResponse::Ok().json(ReviewsResponse { reviews }))
}

/// GET /reviews/{study_spot_id}
async fn list_reviews_for_spot(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let study_spot_id = positive_spot_id(path.into_inner())?;
    let reviews = state.reviews.list_reviews(Some(study_spot_id)).await;
    Ok(HttpResponse::Ok().json(ReviewsResponse { reviews }))
}

fn positive_spot_id(id: i64) -> Result<i64, ApiError> {
    if id <= 0 {
        return Err(ApiError::Validation(
            "Study spot ID must be a positive integer.".to_string(),
        ));
    }
    Ok(id)
}
