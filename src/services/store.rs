use async_trait::async_trait;
use thiserror::Error;
use crate::models::{Location, NewReview, Review};

/// Errors that can occur when talking to a catalog or review backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid seed data: {0}")]
    SeedError(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Rejects reviews that break the stored-row constraints
///
/// Backends call this before writing so that every store enforces the same
/// rules as the request validator, whoever the caller is.
pub fn check_new_review(review: &NewReview) -> Result<(), StoreError> {
    if review.study_spot_id <= 0 {
        return Err(StoreError::InvalidInput(format!(
            "study spot id must be positive, got {}",
            review.study_spot_id
        )));
    }
    if review.name.trim().is_empty() {
        return Err(StoreError::InvalidInput("name is blank".to_string()));
    }
    if review.review.trim().is_empty() {
        return Err(StoreError::InvalidInput("review text is blank".to_string()));
    }
    if !(1..=5).contains(&review.stars) {
        return Err(StoreError::InvalidInput(format!(
            "stars must be between 1 and 5, got {}",
            review.stars
        )));
    }
    Ok(())
}

/// Read access to the study spot catalog
///
/// Implementations swallow their own failures and return an empty list, so
/// callers see an unavailable catalog the same way as an empty one.
#[async_trait]
pub trait LocationCatalog: Send + Sync {
    async fn list_locations(&self) -> Vec<Location>;

    async fn health_check(&self) -> bool {
        true
    }
}

/// Append-only review storage
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Insert one review, rejecting it with `InvalidInput` if `check_new_review` fails
    async fn insert_review(&self, review: NewReview) -> Result<Review, StoreError>;

    /// Reviews newest first, optionally restricted to one study spot
    ///
    /// Failures are logged and yield an empty list.
    async fn list_reviews(&self, study_spot_id: Option<i64>) -> Vec<Review>;

    async fn health_check(&self) -> bool {
        true
    }
}
