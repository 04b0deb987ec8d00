use async_trait::async_trait;
use mongodb::{Collection, Database};

use super::{mongo, RepositoryError, SeedTarget};
use crate::constants::CARS_COLLECTION;
use crate::models::{Car, Stored};
use crate::query::CarFilter;

#[async_trait]
pub trait CarRepository: SeedTarget<Car> {
    /// Every car matching `filter`, in storage order.
    async fn find(&self, filter: &CarFilter) -> Result<Vec<Stored<Car>>, RepositoryError>;
}

#[derive(Clone)]
pub struct MongoCarRepository {
    collection: Collection<Car>,
}

impl MongoCarRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(CARS_COLLECTION),
        }
    }
}

#[async_trait]
impl SeedTarget<Car> for MongoCarRepository {
    fn collection_name(&self) -> &'static str {
        CARS_COLLECTION
    }

    async fn replace_all(&self, records: Vec<Car>) -> Result<u64, RepositoryError> {
        mongo::replace_collection(&self.collection, records).await
    }
}

#[async_trait]
impl CarRepository for MongoCarRepository {
    async fn find(&self, filter: &CarFilter) -> Result<Vec<Stored<Car>>, RepositoryError> {
        mongo::find_stored(&self.collection, filter.to_document()).await
    }
}
