//! Filter resolution for inventory lookups.
//!
//! Every car endpoint goes through the same pipeline: raw path or query
//! parameters are validated in [`params`], mileage and price thresholds are
//! discretised by [`bucket`], and the result is a [`CarFilter`] that the
//! repositories either render as a BSON filter document or evaluate in memory.

pub mod bucket;
pub mod filter;
pub mod params;

pub use bucket::{resolve_bucket, BucketMetric, RangeCondition};
pub use filter::CarFilter;
pub use params::{current_year, InventoryParams, ValidationError};

#[cfg(test)]
mod bucket_test;
#[cfg(test)]
mod filter_test;
