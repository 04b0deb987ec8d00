#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use inventory_api_rust::{
    app,
    models::{Car, Dealership, Review, Stored},
    query::CarFilter,
    repository::{
        CarRepository, DealershipRepository, InMemoryStore, RepositoryError, ReviewRepository,
        SeedTarget,
    },
    state::AppState,
};
use tokio::net::TcpListener;

/// Starts the full router on an ephemeral port and returns its address.
pub async fn create_test_server(state: AppState) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });

    let mut retries = 0;
    while retries < 10 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
        retries += 1;
    }

    addr
}

pub fn sample_inventory() -> InMemoryStore {
    InMemoryStore::with_cars(vec![
        Car::new(1, "Toyota", "Corolla", "Sedan", 2018, 45_000).with_price(18_000),
        Car::new(1, "Toyota", "Camry", "Sedan", 2021, 50_000).with_price(32_000),
        Car::new(1, "Honda", "Civic", "Sedan", 2015, 95_000).with_price(20_000),
        Car::new(1, "Audi", "A6", "Sedan", 1998, 260_000),
        Car::new(2, "NISSAN", "Qashqai", "SUV", 2019, 100_000).with_price(60_000),
        Car::new(2, "NISSAN", "Pathfinder", "SUV", 2016, 150_000).with_price(95_000),
    ])
}

pub fn dealership(id: i64, state: &str) -> Dealership {
    Dealership {
        id,
        city: "El Paso".to_string(),
        state: state.to_string(),
        address: "3 Nova Court".to_string(),
        zip: "88563".to_string(),
        lat: "31.6948".to_string(),
        long: "-106.3".to_string(),
        short_name: Some("Holdlamis".to_string()),
        full_name: "Holdlamis Car Dealership".to_string(),
    }
}

/// Every operation fails as if the database were unreachable.
#[derive(Clone, Copy)]
pub struct UnreachableStore;

fn unreachable() -> RepositoryError {
    RepositoryError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl SeedTarget<Car> for UnreachableStore {
    fn collection_name(&self) -> &'static str {
        "cars"
    }

    async fn replace_all(&self, _records: Vec<Car>) -> Result<u64, RepositoryError> {
        Err(unreachable())
    }
}

#[async_trait]
impl CarRepository for UnreachableStore {
    async fn find(&self, _filter: &CarFilter) -> Result<Vec<Stored<Car>>, RepositoryError> {
        Err(unreachable())
    }
}

#[async_trait]
impl SeedTarget<Dealership> for UnreachableStore {
    fn collection_name(&self) -> &'static str {
        "dealerships"
    }

    async fn replace_all(&self, _records: Vec<Dealership>) -> Result<u64, RepositoryError> {
        Err(unreachable())
    }
}

#[async_trait]
impl DealershipRepository for UnreachableStore {
    async fn find_all(&self) -> Result<Vec<Stored<Dealership>>, RepositoryError> {
        Err(unreachable())
    }

    async fn find_by_state(&self, _state: &str) -> Result<Vec<Stored<Dealership>>, RepositoryError> {
        Err(unreachable())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Vec<Stored<Dealership>>, RepositoryError> {
        Err(unreachable())
    }
}

#[async_trait]
impl SeedTarget<Review> for UnreachableStore {
    fn collection_name(&self) -> &'static str {
        "reviews"
    }

    async fn replace_all(&self, _records: Vec<Review>) -> Result<u64, RepositoryError> {
        Err(unreachable())
    }
}

#[async_trait]
impl ReviewRepository for UnreachableStore {
    async fn find_by_dealership(&self, _dealer_id: i64) -> Result<Vec<Stored<Review>>, RepositoryError> {
        Err(unreachable())
    }

    async fn max_id(&self) -> Result<Option<i64>, RepositoryError> {
        Err(unreachable())
    }

    async fn insert(&self, _review: Review) -> Result<Stored<Review>, RepositoryError> {
        Err(unreachable())
    }
}

pub fn unreachable_state() -> AppState {
    use std::sync::Arc;
    AppState::new(
        Arc::new(UnreachableStore),
        Arc::new(UnreachableStore),
        Arc::new(UnreachableStore),
    )
}
