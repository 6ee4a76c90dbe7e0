use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use crate::config::DatabaseSettings;
use crate::models::{Location, NewReview, Review};
use crate::services::store::{check_new_review, LocationCatalog, ReviewStore, StoreError};

/// PostgreSQL backend for both the catalog and the reviews
///
/// The catalog table is owned by another system and only read here. The
/// `reviews` table is created by the bundled migrations.
pub struct PostgresClient {
    pool: PgPool,
    catalog_query: String,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        catalog_table: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        if !is_identifier(catalog_table) {
            return Err(StoreError::InvalidInput(format!(
                "catalog table name {:?} is not a plain identifier",
                catalog_table
            )));
        }

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self {
            pool,
            catalog_query: catalog_query(catalog_table),
        })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        tracing::info!(
            "Connecting to PostgreSQL (catalog table: {})",
            settings.catalog_table
        );

        Self::new(
            &settings.url,
            &settings.catalog_table,
            settings.max_connections,
            settings.min_connections,
            Duration::from_secs(settings.acquire_timeout_secs),
            Duration::from_secs(settings.idle_timeout_secs),
        )
        .await
    }

    async fn fetch_locations(&self) -> Result<Vec<Location>, StoreError> {
        let rows = sqlx::query(&self.catalog_query)
            .fetch_all(&self.pool)
            .await?;

        let mut locations = Vec::with_capacity(rows.len());
        for row in &rows {
            match row.try_get::<Value, _>("spot")? {
                Value::Object(attributes) => locations.push(Location::new(attributes)),
                other => tracing::warn!("Skipping non-object catalog row: {}", other),
            }
        }
        Ok(locations)
    }

    async fn fetch_reviews(&self, study_spot_id: Option<i64>) -> Result<Vec<Review>, StoreError> {
        let query = r#"
            SELECT id, study_spot_id, name, stars, review, created_at
            FROM reviews
            WHERE $1::BIGINT IS NULL OR study_spot_id = $1
            ORDER BY created_at DESC, id DESC
        "#;

        let reviews = sqlx::query_as::<_, Review>(query)
            .bind(study_spot_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(reviews)
    }
}

#[async_trait]
impl LocationCatalog for PostgresClient {
    async fn list_locations(&self) -> Vec<Location> {
        match self.fetch_locations().await {
            Ok(locations) => {
                tracing::debug!("Loaded {} study spots", locations.len());
                locations
            }
            Err(e) => {
                tracing::error!("Error fetching study spots: {}", e);
                vec![]
            }
        }
    }

    async fn health_check(&self) -> bool {
        ping(&self.pool).await
    }
}

#[async_trait]
impl ReviewStore for PostgresClient {
    async fn insert_review(&self, review: NewReview) -> Result<Review, StoreError> {
        check_new_review(&review)?;
        let query = r#"
            INSERT INTO reviews (study_spot_id, name, stars, review)
            VALUES ($1, $2, $3, $4)
            RETURNING id, study_spot_id, name, stars, review, created_at
        "#;

        let stored = sqlx::query_as::<_, Review>(query)
            .bind(review.study_spot_id)
            .bind(&review.name)
            .bind(review.stars)
            .bind(&review.review)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(
            "Stored review {} for study spot {}",
            stored.id,
            stored.study_spot_id
        );

        Ok(stored)
    }

    async fn list_reviews(&self, study_spot_id: Option<i64>) -> Vec<Review> {
        match self.fetch_reviews(study_spot_id).await {
            Ok(reviews) => reviews,
            Err(e) => {
                tracing::error!("Error fetching reviews: {}", e);
                vec![]
            }
        }
    }

    async fn health_check(&self) -> bool {
        ping(&self.pool).await
    }
}

async fn ping(pool: &PgPool) -> bool {
    sqlx::query("SELECT 1").fetch_one(pool).await.is_ok()
}

fn catalog_query(table: &str) -> String {
    format!("SELECT to_jsonb(s) AS spot FROM {} s ORDER BY s.id", table)
}

/// Table names are interpolated into SQL, so only plain identifiers pass
fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
