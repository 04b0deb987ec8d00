use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use super::{mongo, RepositoryError, SeedTarget};
use crate::constants::DEALERSHIPS_COLLECTION;
use crate::models::{Dealership, Stored};

#[async_trait]
pub trait DealershipRepository: SeedTarget<Dealership> {
    async fn find_all(&self) -> Result<Vec<Stored<Dealership>>, RepositoryError>;

    async fn find_by_state(&self, state: &str) -> Result<Vec<Stored<Dealership>>, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Vec<Stored<Dealership>>, RepositoryError>;
}

#[derive(Clone)]
pub struct MongoDealershipRepository {
    collection: Collection<Dealership>,
}

impl MongoDealershipRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(DEALERSHIPS_COLLECTION),
        }
    }
}

#[async_trait]
impl SeedTarget<Dealership> for MongoDealershipRepository {
    fn collection_name(&self) -> &'static str {
        DEALERSHIPS_COLLECTION
    }

    async fn replace_all(&self, records: Vec<Dealership>) -> Result<u64, RepositoryError> {
        mongo::replace_collection(&self.collection, records).await
    }
}

#[async_trait]
impl DealershipRepository for MongoDealershipRepository {
    async fn find_all(&self) -> Result<Vec<Stored<Dealership>>, RepositoryError> {
        mongo::find_stored(&self.collection, doc! {}).await
    }

    async fn find_by_state(&self, state: &str) -> Result<Vec<Stored<Dealership>>, RepositoryError> {
        mongo::find_stored(&self.collection, doc! { "state": state }).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Vec<Stored<Dealership>>, RepositoryError> {
        mongo::find_stored(&self.collection, doc! { "id": id }).await
    }
}
