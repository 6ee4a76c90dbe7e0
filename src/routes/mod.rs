// Route exports
pub mod reviews;
pub mod study_spots;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::error::{handle_json_payload_error, handle_query_payload_error};
use crate::models::{HealthResponse, MessageResponse};
use crate::services::{LocationCatalog, ReviewStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn LocationCatalog>,
    pub reviews: Arc<dyn ReviewStore>,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .configure(study_spots::configure)
        .configure(reviews::configure);
}

async fn root() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: "Study spot API is running".to_string(),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let catalog_healthy = state.catalog.health_check().await;
    let reviews_healthy = state.reviews.health_check().await;

    let status = if catalog_healthy && reviews_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
