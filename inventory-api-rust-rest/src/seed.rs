//! Startup reload of the static data files.
//!
//! Each seed file is a JSON object holding one array under the collection's
//! name, e.g. `{ "cars": [ ... ] }`. Loading truncates the collection and then
//! bulk-inserts; the two steps are not atomic, so readers may briefly see an
//! empty collection.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;
use crate::constants::API_NAME;
use crate::models::{Car, Dealership, Review};
use crate::repository::{
    CarRepository, DealershipRepository, RepositoryError, ReviewRepository, SeedTarget,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Seed file {path} has no top-level '{key}' array")]
    MissingKey { path: PathBuf, key: &'static str },

    #[error("Failed to replace '{collection}' collection: {source}")]
    Store {
        collection: &'static str,
        #[source]
        source: RepositoryError,
    },
}

/// Reads the array stored under `key` in the seed file at `path`.
pub fn read_seed_file<T: DeserializeOwned>(path: &Path, key: &'static str) -> Result<Vec<T>, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut document: Value = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let records = document
        .get_mut(key)
        .filter(|value| value.is_array())
        .map(Value::take)
        .ok_or_else(|| SeedError::MissingKey {
            path: path.to_path_buf(),
            key,
        })?;

    serde_json::from_value(records).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Replaces the target collection with the contents of `path`.
///
/// A file that cannot be read or parsed leaves the collection untouched.
pub async fn reseed<T, R>(target: &R, path: &Path) -> Result<u64, SeedError>
where
    T: DeserializeOwned + Send,
    R: SeedTarget<T> + ?Sized,
{
    let collection = target.collection_name();
    let records: Vec<T> = read_seed_file(path, collection)?;

    target
        .replace_all(records)
        .await
        .map_err(|source| SeedError::Store { collection, source })
}

/// Which files to load. Dealerships and reviews are optional.
#[derive(Debug, Clone)]
pub struct SeedPlan {
    pub cars: PathBuf,
    pub dealerships: Option<PathBuf>,
    pub reviews: Option<PathBuf>,
}

impl From<&Config> for SeedPlan {
    fn from(config: &Config) -> Self {
        Self {
            cars: config.car_seed_file.clone(),
            dealerships: config.dealership_seed_file.clone(),
            reviews: config.review_seed_file.clone(),
        }
    }
}

/// Outcome of a seed run, one entry per attempted collection.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: Vec<(&'static str, u64)>,
    pub failed: Vec<&'static str>,
}

impl SeedReport {
    pub fn inserted_into(&self, collection: &str) -> Option<u64> {
        self.inserted
            .iter()
            .find(|(name, _)| *name == collection)
            .map(|(_, count)| *count)
    }

    fn record(&mut self, collection: &'static str, outcome: Result<u64, SeedError>) {
        match outcome {
            Ok(count) => {
                tracing::info!(
                    "{} Initial data inserted: {} documents inserted into '{}'",
                    API_NAME,
                    count,
                    collection
                );
                self.inserted.push((collection, count));
            }
            Err(e) => {
                tracing::error!("{} Error initializing database: {}", API_NAME, e);
                self.failed.push(collection);
            }
        }
    }
}

#[derive(Clone)]
pub struct SeedLoader {
    plan: SeedPlan,
    cars: Arc<dyn CarRepository>,
    dealerships: Arc<dyn DealershipRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl SeedLoader {
    pub fn new(
        plan: SeedPlan,
        cars: Arc<dyn CarRepository>,
        dealerships: Arc<dyn DealershipRepository>,
        reviews: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            plan,
            cars,
            dealerships,
            reviews,
        }
    }

    /// Loads every planned collection. Failures are logged and recorded in
    /// the report, never returned.
    pub async fn run(&self) -> SeedReport {
        let mut report = SeedReport::default();

        let outcome = reseed::<Car, _>(self.cars.as_ref(), &self.plan.cars).await;
        report.record(self.cars.collection_name(), outcome);

        if let Some(path) = &self.plan.dealerships {
            let outcome = reseed::<Dealership, _>(self.dealerships.as_ref(), path).await;
            report.record(self.dealerships.collection_name(), outcome);
        }

        if let Some(path) = &self.plan.reviews {
            let outcome = reseed::<Review, _>(self.reviews.as_ref(), path).await;
            report.record(self.reviews.collection_name(), outcome);
        }

        report
    }
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;
