use mongodb::bson::{doc, Document};

use super::bucket::{resolve_bucket, BucketMetric, RangeCondition};
use crate::models::Car;

/// Conjunction of constraints over a single dealer's inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarFilter {
    pub dealer_id: i64,
    pub make: Option<String>,
    pub model: Option<String>,
    pub mileage: Option<RangeCondition>,
    pub price: Option<RangeCondition>,
    /// Inclusive lower bound on the model year.
    pub year_floor: Option<i32>,
}

impl CarFilter {
    pub fn for_dealer(dealer_id: i64) -> Self {
        Self {
            dealer_id,
            make: None,
            model: None,
            mileage: None,
            price: None,
            year_floor: None,
        }
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Adds the bucket selected by `threshold` for the given metric.
    pub fn with_bucket(mut self, metric: BucketMetric, threshold: Option<i64>) -> Self {
        let range = resolve_bucket(metric, threshold);
        match metric {
            BucketMetric::Mileage => self.mileage = Some(range),
            BucketMetric::Price => self.price = Some(range),
        }
        self
    }

    pub fn with_year_floor(mut self, year: i32) -> Self {
        self.year_floor = Some(year);
        self
    }

    /// Renders the filter document sent to the `cars` collection.
    pub fn to_document(&self) -> Document {
        let mut filter = doc! { "dealer_id": self.dealer_id };

        if let Some(make) = &self.make {
            filter.insert("make", make.as_str());
        }
        if let Some(model) = &self.model {
            filter.insert("model", model.as_str());
        }
        for (metric, range) in [
            (BucketMetric::Mileage, &self.mileage),
            (BucketMetric::Price, &self.price),
        ] {
            if let Some(condition) = range.as_ref().and_then(RangeCondition::to_document) {
                filter.insert(metric.field(), condition);
            }
        }
        if let Some(year) = self.year_floor {
            filter.insert("year", doc! { "$gte": year });
        }

        filter
    }

    /// Evaluates the filter against a record with the same semantics as the
    /// rendered document.
    pub fn matches(&self, car: &Car) -> bool {
        if car.dealer_id != self.dealer_id {
            return false;
        }
        if self.make.as_deref().is_some_and(|make| car.make != make) {
            return false;
        }
        if self.model.as_deref().is_some_and(|model| car.model != model) {
            return false;
        }
        if let Some(range) = &self.mileage {
            if !range.contains(car.mileage) {
                return false;
            }
        }
        if let Some(range) = self.price.as_ref().filter(|range| !range.is_unbounded()) {
            // A missing field never satisfies a range condition.
            if !car.price.is_some_and(|price| range.contains(price)) {
                return false;
            }
        }
        self.year_floor.map_or(true, |floor| car.year >= floor)
    }
}
