pub mod car_repo;
pub mod dealership_repo;
pub mod errors;
pub mod memory;
pub mod mongo;
pub mod review_repo;

pub use car_repo::{CarRepository, MongoCarRepository};
pub use dealership_repo::{DealershipRepository, MongoDealershipRepository};
pub use errors::RepositoryError;
pub use memory::InMemoryStore;
pub use review_repo::{MongoReviewRepository, ReviewRepository};

use async_trait::async_trait;

/// A collection that can be truncated and bulk-loaded.
#[async_trait]
pub trait SeedTarget<T: Send>: Send + Sync {
    /// Collection name, also the top-level key of the seed file.
    fn collection_name(&self) -> &'static str;

    /// Deletes every record, then inserts `records`. Returns the number inserted.
    async fn replace_all(&self, records: Vec<T>) -> Result<u64, RepositoryError>;
}
