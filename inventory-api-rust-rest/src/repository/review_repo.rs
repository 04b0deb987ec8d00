use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use super::{mongo, RepositoryError, SeedTarget};
use crate::constants::REVIEWS_COLLECTION;
use crate::models::{Review, Stored};

#[async_trait]
pub trait ReviewRepository: SeedTarget<Review> {
    async fn find_by_dealership(&self, dealer_id: i64) -> Result<Vec<Stored<Review>>, RepositoryError>;

    /// Highest review id currently stored, if any.
    async fn max_id(&self) -> Result<Option<i64>, RepositoryError>;

    async fn insert(&self, review: Review) -> Result<Stored<Review>, RepositoryError>;
}

#[derive(Clone)]
pub struct MongoReviewRepository {
    collection: Collection<Review>,
}

impl MongoReviewRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(REVIEWS_COLLECTION),
        }
    }
}

#[async_trait]
impl SeedTarget<Review> for MongoReviewRepository {
    fn collection_name(&self) -> &'static str {
        REVIEWS_COLLECTION
    }

    async fn replace_all(&self, records: Vec<Review>) -> Result<u64, RepositoryError> {
        mongo::replace_collection(&self.collection, records).await
    }
}

#[async_trait]
impl ReviewRepository for MongoReviewRepository {
    async fn find_by_dealership(&self, dealer_id: i64) -> Result<Vec<Stored<Review>>, RepositoryError> {
        mongo::find_stored(&self.collection, doc! { "dealership": dealer_id }).await
    }

    async fn max_id(&self) -> Result<Option<i64>, RepositoryError> {
        let latest = self
            .collection
            .find_one(doc! {})
            .sort(doc! { "id": -1 })
            .await?;
        Ok(latest.map(|review| review.id))
    }

    async fn insert(&self, review: Review) -> Result<Stored<Review>, RepositoryError> {
        let result = self.collection.insert_one(&review).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or(RepositoryError::UnexpectedId {
                collection: REVIEWS_COLLECTION,
            })?;
        Ok(Stored::new(id, review))
    }
}
