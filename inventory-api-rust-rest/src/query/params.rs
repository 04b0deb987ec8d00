use chrono::Datelike;
use serde::Deserialize;
use thiserror::Error;

use super::bucket::BucketMetric;
use super::filter::CarFilter;
use crate::constants::MIN_MODEL_YEAR;

/// Rejections raised before any store access. All map to `400 Bad Request`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid id type: id should be a number")]
    InvalidId,

    #[error("Invalid year type: year should be a number")]
    InvalidYear,

    #[error("Invalid year: year should be between {min} and {max}")]
    YearOutOfRange { min: i32, max: i32 },

    #[error("Missing parameters: id and {0} are required")]
    MissingParameter(&'static str),
}

/// The calendar year of the local clock, the upper bound for year filters.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn parse_dealer_id(raw: &str) -> Result<i64, ValidationError> {
    raw.trim().parse().map_err(|_| ValidationError::InvalidId)
}

pub fn parse_year_floor(raw: &str, current_year: i32) -> Result<i32, ValidationError> {
    let year: i32 = raw.trim().parse().map_err(|_| ValidationError::InvalidYear)?;
    if !(MIN_MODEL_YEAR..=current_year).contains(&year) {
        return Err(ValidationError::YearOutOfRange {
            min: MIN_MODEL_YEAR,
            max: current_year,
        });
    }
    Ok(year)
}

/// Thresholds are never rejected. The leading integer is read and any
/// trailing text ignored, so `50000.0` and `100000km` select their edge
/// buckets; input without a leading integer lands in the catch-all bucket.
pub fn parse_threshold(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..sign_len + digits_len].parse().ok()
}

/// Blank values are rejected; anything else is matched exactly as sent.
pub fn require_value(raw: &str, name: &'static str) -> Result<String, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::MissingParameter(name));
    }
    Ok(raw.to_string())
}

/// Query string of `GET /inventory/:id`. Every parameter is optional and
/// blank values count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventoryParams {
    pub make: Option<String>,
    pub model: Option<String>,
    pub mileage: Option<String>,
    pub price: Option<String>,
    pub year: Option<String>,
}

impl InventoryParams {
    pub fn into_filter(self, dealer_id: i64, current_year: i32) -> Result<CarFilter, ValidationError> {
        let mut filter = CarFilter::for_dealer(dealer_id);

        if let Some(make) = present(self.make) {
            filter = filter.with_make(make);
        }
        if let Some(model) = present(self.model) {
            filter = filter.with_model(model);
        }
        if let Some(mileage) = present(self.mileage) {
            filter = filter.with_bucket(BucketMetric::Mileage, parse_threshold(&mileage));
        }
        if let Some(price) = present(self.price) {
            filter = filter.with_bucket(BucketMetric::Price, parse_threshold(&price));
        }
        if let Some(year) = present(self.year) {
            filter = filter.with_year_floor(parse_year_floor(&year, current_year)?);
        }

        Ok(filter)
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
