use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::RepositoryError;
use crate::models::Stored;

/// Round-trips a `ping` so connectivity problems surface before seeding.
pub async fn ping(database: &Database) -> Result<(), RepositoryError> {
    database.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

pub(crate) async fn find_stored<T>(
    collection: &Collection<T>,
    filter: Document,
) -> Result<Vec<Stored<T>>, RepositoryError>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let cursor = collection.clone_with_type::<Stored<T>>().find(filter).await?;
    Ok(cursor.try_collect().await?)
}

pub(crate) async fn replace_collection<T>(
    collection: &Collection<T>,
    records: Vec<T>,
) -> Result<u64, RepositoryError>
where
    T: Serialize + Send + Sync,
{
    collection.delete_many(doc! {}).await?;

    // insert_many rejects an empty batch.
    if records.is_empty() {
        return Ok(0);
    }

    let result = collection.insert_many(records).await?;
    Ok(result.inserted_ids.len() as u64)
}
