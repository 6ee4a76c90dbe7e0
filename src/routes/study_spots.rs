use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::MatchError;
use crate::error::ApiError;
use crate::models::{RecommendQuery, RecommendResponse, StudySpotsResponse, SurveyPreferences};
use crate::routes::AppState;

/// Configure all study spot routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/study-spots", web::get().to(list_study_spots))
        .route("/study-spots/recommend", web::post().to(recommend_study_spots))
        .route("/study-spots/{id}", web::get().to(get_study_spot));
}

/// GET /study-spots
async fn list_study_spots(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let study_spots = state.catalog.list_locations().await;
    Ok(HttpResponse::Ok().json(StudySpotsResponse { study_spots }))
}

/// GET /study-spots/{id}
async fn get_study_spot(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let spot = state
        .catalog
        .list_locations()
        .await
        .into_iter()
        .find(|spot| spot.id() == Some(id))
        .ok_or_else(|| ApiError::NotFound("Study spot not found".to_string()))?;

    Ok(HttpResponse::Ok().json(spot))
}

/// Recommend study spots for a set of survey answers
///
/// POST /study-spots/recommend?limit=5
///
/// Request body:
/// ```json
/// {
///   "busyness": "quiet",
///   "powerAccess": "essential",
///   "foodPreference": "Coffee shops",
///   "noiseLevel": "quiet",
///   "lighting": "Bright natural light"
/// }
/// ```
async fn recommend_study_spots(
    state: web::Data<AppState>,
    query: web::Query<RecommendQuery>,
    preferences: web::Json<SurveyPreferences>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    // Reject before touching the catalog
    if preferences.is_empty() {
        return Err(MatchError::EmptyPreferences.into());
    }

    let limit = state.matching.resolve_limit(query.limit);
    let spots = state.catalog.list_locations().await;
    if spots.is_empty() {
        tracing::warn!("Recommendation requested but the catalog is empty");
    }

    let result = state.matcher.rank(&spots, &preferences, limit)?;

    tracing::info!(
        "Returning {} recommendations (from {} study spots)",
        result.matches.len(),
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(RecommendResponse {
        recommended_spots: result.matches,
    }))
}
