use std::sync::Arc;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Car, Stored};
use crate::query::CarFilter;
use crate::repository::CarRepository;

pub const FETCH_CARS_ERROR: &str = "Error fetching cars";
pub const NO_CARS_FOUND: &str = "No cars found";

/// How an empty result set is reported.
///
/// Only the make lookup treats "no matches" as not-found; every other
/// lookup returns an empty list. Existing clients depend on both behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyResult {
    EmptyList,
    NotFound,
}

#[derive(Clone)]
pub struct InventoryService {
    cars: Arc<dyn CarRepository>,
}

impl InventoryService {
    pub fn new(cars: Arc<dyn CarRepository>) -> Self {
        Self { cars }
    }

    pub async fn search(
        &self,
        filter: &CarFilter,
        on_empty: EmptyResult,
    ) -> Result<Vec<Stored<Car>>, AppError> {
        tracing::debug!("{} Searching inventory with filter: {:?}", API_NAME, filter);

        let cars = self
            .cars
            .find(filter)
            .await
            .map_err(AppError::store(FETCH_CARS_ERROR))?;

        if cars.is_empty() && on_empty == EmptyResult::NotFound {
            return Err(AppError::NotFound(NO_CARS_FOUND.to_string()));
        }

        tracing::info!(
            "{} Found {} cars for dealer {}",
            API_NAME,
            cars.len(),
            filter.dealer_id
        );
        Ok(cars)
    }
}
