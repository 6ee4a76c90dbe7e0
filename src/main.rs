use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use studyspot_algo::config::{LoggingSettings, Settings, StorageBackend, StorageSettings};
use studyspot_algo::core::Matcher;
use studyspot_algo::routes::{self, AppState};
use studyspot_algo::services::{
    LocationCatalog, MemoryReviewStore, PostgresClient, ReviewStore, StaticCatalog, StoreError,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging; RUST_LOG takes precedence over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

async fn build_stores(
    settings: &Settings,
) -> Result<(Arc<dyn LocationCatalog>, Arc<dyn ReviewStore>), StoreError> {
    match settings.storage.backend {
        StorageBackend::Postgres => {
            let postgres = Arc::new(PostgresClient::from_settings(&settings.database).await?);
            info!(
                "PostgreSQL client initialized (max: {} connections)",
                settings.database.max_connections
            );
            let catalog: Arc<dyn LocationCatalog> = postgres.clone();
            let reviews: Arc<dyn ReviewStore> = postgres;
            Ok((catalog, reviews))
        }
        StorageBackend::Memory => {
            let catalog = load_static_catalog(&settings.storage)?;
            info!(
                "In-memory storage initialized with {} study spots; reviews are not persisted",
                catalog.len()
            );
            let catalog: Arc<dyn LocationCatalog> = Arc::new(catalog);
            let reviews: Arc<dyn ReviewStore> = Arc::new(MemoryReviewStore::new());
            Ok((catalog, reviews))
        }
    }
}

fn load_static_catalog(storage: &StorageSettings) -> Result<StaticCatalog, StoreError> {
    match &storage.seed_file {
        Some(path) => StaticCatalog::from_json_file(path),
        None => Ok(StaticCatalog::default()),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting study spot service...");
    info!("Configuration loaded successfully");

    let (catalog, reviews) = build_stores(&settings).await.map_err(|e| {
        error!("Failed to initialize storage: {}", e);
        std::io::Error::other(e)
    })?;

    let matcher = Matcher::with_default_rules();

    info!("Matcher initialized with {} dimensions", matcher.rules().len());

    let app_state = AppState {
        catalog,
        reviews,
        matcher,
        matching: settings.matching.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
