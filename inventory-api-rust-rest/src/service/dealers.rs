use std::sync::Arc;

use validator::Validate;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Dealership, NewReview, Review, Stored};
use crate::repository::{DealershipRepository, ReviewRepository};

pub const FETCH_DOCUMENTS_ERROR: &str = "Error fetching documents";
pub const INSERT_REVIEW_ERROR: &str = "Error inserting review";

/// Read access to dealerships and their reviews, plus review submission.
#[derive(Clone)]
pub struct DealerService {
    dealerships: Arc<dyn DealershipRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl DealerService {
    pub fn new(
        dealerships: Arc<dyn DealershipRepository>,
        reviews: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            dealerships,
            reviews,
        }
    }

    pub async fn list_dealerships(
        &self,
        state: Option<&str>,
    ) -> Result<Vec<Stored<Dealership>>, AppError> {
        let result = match state {
            Some(state) => self.dealerships.find_by_state(state).await,
            None => self.dealerships.find_all().await,
        };
        result.map_err(AppError::store(FETCH_DOCUMENTS_ERROR))
    }

    pub async fn dealership(&self, id: i64) -> Result<Vec<Stored<Dealership>>, AppError> {
        self.dealerships
            .find_by_id(id)
            .await
            .map_err(AppError::store(FETCH_DOCUMENTS_ERROR))
    }

    pub async fn reviews_for(&self, dealer_id: i64) -> Result<Vec<Stored<Review>>, AppError> {
        self.reviews
            .find_by_dealership(dealer_id)
            .await
            .map_err(AppError::store(FETCH_DOCUMENTS_ERROR))
    }

    /// Stores a review under the next sequential id.
    ///
    /// Two concurrent submissions may be assigned the same id; review ids are
    /// not unique-indexed.
    pub async fn insert_review(&self, review: NewReview) -> Result<Stored<Review>, AppError> {
        review
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let next_id = self
            .reviews
            .max_id()
            .await
            .map_err(AppError::store(INSERT_REVIEW_ERROR))?
            .map_or(1, |id| id + 1);

        let stored = self
            .reviews
            .insert(review.into_review(next_id))
            .await
            .map_err(AppError::store(INSERT_REVIEW_ERROR))?;

        tracing::info!(
            "{} Inserted review {} for dealership {}",
            API_NAME,
            stored.record.id,
            stored.record.dealership
        );
        Ok(stored)
    }
}
