// Service exports
pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::{MemoryReviewStore, StaticCatalog};
pub use postgres::PostgresClient;
pub use store::{check_new_review, LocationCatalog, ReviewStore, StoreError};
