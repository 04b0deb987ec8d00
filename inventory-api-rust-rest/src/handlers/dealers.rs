use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Json,
    routing::{get, post},
    Router,
};

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Dealership, NewReview, Review, Stored};
use crate::query::params::parse_dealer_id;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/fetchDealers", get(all_dealerships))
        .route("/fetchDealers/:state", get(dealerships_by_state))
        .route("/fetchDealer/:id", get(dealership_by_id))
        .route("/fetchReviews/dealer/:id", get(reviews_by_dealer))
        .route("/insert_review", post(insert_review))
}

async fn all_dealerships(
    State(state): State<AppState>,
) -> Result<Json<Vec<Stored<Dealership>>>, AppError> {
    Ok(Json(state.dealers.list_dealerships(None).await?))
}

async fn dealerships_by_state(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Stored<Dealership>>>, AppError> {
    let Path(region) = path?;
    Ok(Json(state.dealers.list_dealerships(Some(&region)).await?))
}

async fn dealership_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Stored<Dealership>>>, AppError> {
    let Path(id) = path?;
    let id = parse_dealer_id(&id)?;
    Ok(Json(state.dealers.dealership(id).await?))
}

async fn reviews_by_dealer(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Stored<Review>>>, AppError> {
    let Path(id) = path?;
    let id = parse_dealer_id(&id)?;
    Ok(Json(state.dealers.reviews_for(id).await?))
}

async fn insert_review(
    State(state): State<AppState>,
    payload: Result<Json<NewReview>, JsonRejection>,
) -> Result<Json<Stored<Review>>, AppError> {
    let Json(review) = payload?;

    tracing::info!("{} Received review for dealership {}", API_NAME, review.dealership);

    Ok(Json(state.dealers.insert_review(review).await?))
}
