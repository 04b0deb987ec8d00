use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub name: String,
    pub dealership: i64,
    pub review: String,
    #[serde(default)]
    pub purchase: bool,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub car_make: String,
    #[serde(default)]
    pub car_model: String,
    #[serde(default)]
    pub car_year: i32,
}

/// Body of `POST /insert_review`. The id is assigned by the service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewReview {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub dealership: i64,
    #[validate(length(min = 1, message = "review is required"))]
    pub review: String,
    #[serde(default)]
    pub purchase: bool,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub car_make: String,
    #[serde(default)]
    pub car_model: String,
    #[serde(default)]
    pub car_year: i32,
}

impl NewReview {
    pub fn into_review(self, id: i64) -> Review {
        Review {
            id,
            name: self.name,
            dealership: self.dealership,
            review: self.review,
            purchase: self.purchase,
            purchase_date: self.purchase_date,
            car_make: self.car_make,
            car_model: self.car_model,
            car_year: self.car_year,
        }
    }
}
