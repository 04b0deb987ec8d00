use mongodb::bson::Document;

use crate::constants::{MILEAGE_BUCKET_EDGES, PRICE_BUCKET_EDGES};

/// The numeric fields that are filtered by fixed buckets instead of exact thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketMetric {
    Mileage,
    Price,
}

impl BucketMetric {
    /// Ascending upper edges of the bounded buckets.
    pub fn edges(self) -> &'static [i64] {
        match self {
            BucketMetric::Mileage => &MILEAGE_BUCKET_EDGES,
            BucketMetric::Price => &PRICE_BUCKET_EDGES,
        }
    }

    /// Name of the car field the bucket applies to.
    pub fn field(self) -> &'static str {
        match self {
            BucketMetric::Mileage => "mileage",
            BucketMetric::Price => "price",
        }
    }
}

/// A half-open numeric range: `lower_exclusive < value <= upper_inclusive`.
/// A missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeCondition {
    pub lower_exclusive: Option<i64>,
    pub upper_inclusive: Option<i64>,
}

impl RangeCondition {
    pub fn is_unbounded(&self) -> bool {
        self.lower_exclusive.is_none() && self.upper_inclusive.is_none()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.lower_exclusive.map_or(true, |lower| value > lower)
            && self.upper_inclusive.map_or(true, |upper| value <= upper)
    }

    /// Renders the range as a store condition (`$gt` / `$lte`), or `None`
    /// when it is unbounded on both sides.
    pub fn to_document(&self) -> Option<Document> {
        let mut condition = Document::new();
        if let Some(upper) = self.upper_inclusive {
            condition.insert("$lte", upper);
        }
        if let Some(lower) = self.lower_exclusive {
            condition.insert("$gt", lower);
        }
        (!condition.is_empty()).then_some(condition)
    }
}

/// Maps a requested threshold to its bucket.
///
/// Only exact edge values select a bounded bucket; the first edge has no
/// lower bound and each later edge is bounded below by its predecessor. Any
/// other value, or `None` for a threshold that did not parse, selects the
/// catch-all bucket above the last edge.
pub fn resolve_bucket(metric: BucketMetric, threshold: Option<i64>) -> RangeCondition {
    let edges = metric.edges();
    let mut previous: Option<i64> = None;

    if let Some(value) = threshold {
        for &edge in edges {
            if value == edge {
                return RangeCondition {
                    lower_exclusive: previous,
                    upper_inclusive: Some(edge),
                };
            }
            previous = Some(edge);
        }
    }

    RangeCondition {
        lower_exclusive: edges.last().copied(),
        upper_inclusive: None,
    }
}
