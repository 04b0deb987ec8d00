//! Inventory routes.
//!
//! The per-filter routes predate `/inventory/:id`; each one fills a single
//! field of the shared [`CarFilter`] and goes through the same service call.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
    routing::get,
    Router,
};

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Car, Stored};
use crate::query::params::{parse_dealer_id, parse_threshold, parse_year_floor, require_value};
use crate::query::{current_year, BucketMetric, CarFilter, InventoryParams, ValidationError};
use crate::service::EmptyResult;
use crate::state::AppState;

type CarList = Result<Json<Vec<Stored<Car>>>, AppError>;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cars/:id", get(cars_by_dealer))
        .route("/carsbymake/:id", get(missing_make))
        .route("/carsbymake/:id/", get(missing_make))
        .route("/carsbymake/:id/:make", get(cars_by_make))
        .route("/carsbymodel/:id", get(missing_model))
        .route("/carsbymodel/:id/", get(missing_model))
        .route("/carsbymodel/:id/:model", get(cars_by_model))
        .route("/carsbymaxmileage/:id/:mileage", get(cars_by_mileage))
        .route("/carsbyprice/:id/:price", get(cars_by_price))
        .route("/carsbyyear/:id/:year", get(cars_by_year))
        .route("/inventory/:id", get(inventory))
}

async fn run(state: &AppState, filter: CarFilter, on_empty: EmptyResult) -> CarList {
    let cars = state.inventory.search(&filter, on_empty).await?;
    Ok(Json(cars))
}

type PathPair = Result<Path<(String, String)>, PathRejection>;

async fn cars_by_dealer(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> CarList {
    let Path(id) = path?;
    let dealer_id = parse_dealer_id(&id)?;
    tracing::info!("{} Fetching cars for dealer {}", API_NAME, dealer_id);
    run(&state, CarFilter::for_dealer(dealer_id), EmptyResult::EmptyList).await
}

async fn cars_by_make(
    State(state): State<AppState>,
    path: PathPair,
) -> CarList {
    let Path((id, make)) = path?;
    let make = require_value(&make, "make")?;
    let filter = CarFilter::for_dealer(parse_dealer_id(&id)?).with_make(make);
    run(&state, filter, EmptyResult::NotFound).await
}

async fn missing_make() -> Result<(), AppError> {
    Err(ValidationError::MissingParameter("make").into())
}

async fn cars_by_model(
    State(state): State<AppState>,
    path: PathPair,
) -> CarList {
    let Path((id, model)) = path?;
    let model = require_value(&model, "model")?;
    let filter = CarFilter::for_dealer(parse_dealer_id(&id)?).with_model(model);
    run(&state, filter, EmptyResult::EmptyList).await
}

async fn missing_model() -> Result<(), AppError> {
    Err(ValidationError::MissingParameter("model").into())
}

async fn cars_by_mileage(
    State(state): State<AppState>,
    path: PathPair,
) -> CarList {
    let Path((id, mileage)) = path?;
    let filter = CarFilter::for_dealer(parse_dealer_id(&id)?)
        .with_bucket(BucketMetric::Mileage, parse_threshold(&mileage));
    run(&state, filter, EmptyResult::EmptyList).await
}

async fn cars_by_price(
    State(state): State<AppState>,
    path: PathPair,
) -> CarList {
    let Path((id, price)) = path?;
    let filter = CarFilter::for_dealer(parse_dealer_id(&id)?)
        .with_bucket(BucketMetric::Price, parse_threshold(&price));
    run(&state, filter, EmptyResult::EmptyList).await
}

async fn cars_by_year(
    State(state): State<AppState>,
    path: PathPair,
) -> CarList {
    let Path((id, year)) = path?;
    let dealer_id = parse_dealer_id(&id)?;
    let year = parse_year_floor(&year, current_year())?;
    run(&state, CarFilter::for_dealer(dealer_id).with_year_floor(year), EmptyResult::EmptyList).await
}

async fn inventory(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<InventoryParams>, QueryRejection>,
) -> CarList {
    let Path(id) = path?;
    let Query(params) = query?;
    let dealer_id = parse_dealer_id(&id)?;
    let filter = params.into_filter(dealer_id, current_year())?;
    run(&state, filter, EmptyResult::EmptyList).await
}
