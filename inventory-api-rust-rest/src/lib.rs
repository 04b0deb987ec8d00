pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod repository;
pub mod seed;
pub mod service;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;

use handlers::{cars, dealers, health};
use state::AppState;

/// Builds the full HTTP surface over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(cars::router())
        .merge(dealers::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
