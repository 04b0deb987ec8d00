use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Insert into '{collection}' did not return an ObjectId")]
    UnexpectedId { collection: &'static str },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
