//! Process-local store backing all three collections.
//!
//! Evaluates [`CarFilter`] with the same semantics as the rendered MongoDB
//! filter, so the service and HTTP layers can run without a database.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::{
    CarRepository, DealershipRepository, RepositoryError, ReviewRepository, SeedTarget,
};
use crate::constants::{CARS_COLLECTION, DEALERSHIPS_COLLECTION, REVIEWS_COLLECTION};
use crate::models::{Car, Dealership, Review, Stored};
use crate::query::CarFilter;

#[derive(Clone, Default)]
pub struct InMemoryStore {
    cars: Arc<RwLock<Vec<Stored<Car>>>>,
    dealerships: Arc<RwLock<Vec<Stored<Dealership>>>>,
    reviews: Arc<RwLock<Vec<Stored<Review>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with `cars`, each given a fresh id.
    pub fn with_cars(cars: Vec<Car>) -> Self {
        let store = Self::default();
        if let Ok(mut guard) = store.cars.write() {
            guard.extend(cars.into_iter().map(stamp));
        }
        store
    }
}

fn stamp<T>(record: T) -> Stored<T> {
    Stored::new(ObjectId::new(), record)
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, RepositoryError> {
    lock.read()
        .map_err(|_| RepositoryError::Unavailable("in-memory store lock poisoned".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, RepositoryError> {
    lock.write()
        .map_err(|_| RepositoryError::Unavailable("in-memory store lock poisoned".to_string()))
}

fn replace<T>(lock: &RwLock<Vec<Stored<T>>>, records: Vec<T>) -> Result<u64, RepositoryError> {
    let mut guard = write(lock)?;
    guard.clear();
    guard.extend(records.into_iter().map(stamp));
    Ok(guard.len() as u64)
}

fn select<T, F>(lock: &RwLock<Vec<Stored<T>>>, predicate: F) -> Result<Vec<Stored<T>>, RepositoryError>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    Ok(read(lock)?
        .iter()
        .filter(|stored| predicate(&stored.record))
        .cloned()
        .collect())
}

#[async_trait]
impl SeedTarget<Car> for InMemoryStore {
    fn collection_name(&self) -> &'static str {
        CARS_COLLECTION
    }

    async fn replace_all(&self, records: Vec<Car>) -> Result<u64, RepositoryError> {
        replace(&self.cars, records)
    }
}

#[async_trait]
impl CarRepository for InMemoryStore {
    async fn find(&self, filter: &CarFilter) -> Result<Vec<Stored<Car>>, RepositoryError> {
        select(&self.cars, |car| filter.matches(car))
    }
}

#[async_trait]
impl SeedTarget<Dealership> for InMemoryStore {
    fn collection_name(&self) -> &'static str {
        DEALERSHIPS_COLLECTION
    }

    async fn replace_all(&self, records: Vec<Dealership>) -> Result<u64, RepositoryError> {
        replace(&self.dealerships, records)
    }
}

#[async_trait]
impl DealershipRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Stored<Dealership>>, RepositoryError> {
        select(&self.dealerships, |_| true)
    }

    async fn find_by_state(&self, state: &str) -> Result<Vec<Stored<Dealership>>, RepositoryError> {
        select(&self.dealerships, |dealer| dealer.state == state)
    }

    async fn find_by_id(&self, id: i64) -> Result<Vec<Stored<Dealership>>, RepositoryError> {
        select(&self.dealerships, |dealer| dealer.id == id)
    }
}

#[async_trait]
impl SeedTarget<Review> for InMemoryStore {
    fn collection_name(&self) -> &'static str {
        REVIEWS_COLLECTION
    }

    async fn replace_all(&self, records: Vec<Review>) -> Result<u64, RepositoryError> {
        replace(&self.reviews, records)
    }
}

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn find_by_dealership(&self, dealer_id: i64) -> Result<Vec<Stored<Review>>, RepositoryError> {
        select(&self.reviews, |review| review.dealership == dealer_id)
    }

    async fn max_id(&self) -> Result<Option<i64>, RepositoryError> {
        Ok(read(&self.reviews)?.iter().map(|stored| stored.record.id).max())
    }

    async fn insert(&self, review: Review) -> Result<Stored<Review>, RepositoryError> {
        let stored = stamp(review);
        write(&self.reviews)?.push(stored.clone());
        Ok(stored)
    }
}
