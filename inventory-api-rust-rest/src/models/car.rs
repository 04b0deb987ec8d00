use serde::{Deserialize, Serialize};

/// A single vehicle in a dealer's inventory (`cars` collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub dealer_id: i64,
    pub make: String,
    pub model: String,
    #[serde(rename = "bodyType")]
    pub body_type: String,
    pub year: i32,
    pub mileage: i64,
    // Records without a price never fall into a price bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
}

impl Car {
    pub fn new(
        dealer_id: i64,
        make: &str,
        model: &str,
        body_type: &str,
        year: i32,
        mileage: i64,
    ) -> Self {
        Self {
            dealer_id,
            make: make.to_string(),
            model: model.to_string(),
            body_type: body_type.to_string(),
            year,
            mileage,
            price: None,
        }
    }

    pub fn with_price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }
}
