use async_trait::async_trait;
use chrono::Utc;
use std::path::Path;
use tokio::sync::RwLock;
use crate::models::{Location, NewReview, Review};
use crate::services::store::{check_new_review, LocationCatalog, ReviewStore, StoreError};

/// Fixed catalog held in memory
///
/// Used for local development (seeded from a JSON file) and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    locations: Vec<Location>,
}

impl StaticCatalog {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// Load a catalog from a JSON array of location objects
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let locations: Vec<Location> = serde_json::from_str(&raw)?;
        tracing::info!(
            "Loaded {} study spots from {}",
            locations.len(),
            path.as_ref().display()
        );
        Ok(Self::new(locations))
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[async_trait]
impl LocationCatalog for StaticCatalog {
    async fn list_locations(&self) -> Vec<Location> {
        self.locations.clone()
    }
}

/// Review store kept in process memory, lost on restart
#[derive(Debug, Default)]
pub struct MemoryReviewStore {
    reviews: RwLock<Vec<Review>>,
}

impl MemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewStore for MemoryReviewStore {
    async fn insert_review(&self, review: NewReview) -> Result<Review, StoreError> {
        check_new_review(&review)?;
        let mut reviews = self.reviews.write().await;
        let stored = Review {
            id: reviews.len() as i64 + 1,
            study_spot_id: review.study_spot_id,
            name: review.name,
            stars: review.stars,
            review: review.review,
            created_at: Utc::now(),
        };
        reviews.push(stored.clone());
        Ok(stored)
    }

    async fn list_reviews(&self, study_spot_id: Option<i64>) -> Vec<Review> {
        let reviews = self.reviews.read().await;
        let mut selected: Vec<Review> = reviews
            .iter()
            .filter(|r| study_spot_id.map_or(true, |id| r.study_spot_id == id))
            .cloned()
            .collect();
        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        selected
    }
}
