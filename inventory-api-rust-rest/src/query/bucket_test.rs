use super::bucket::{resolve_bucket, BucketMetric, RangeCondition};

fn range(lower_exclusive: Option<i64>, upper_inclusive: Option<i64>) -> RangeCondition {
    RangeCondition {
        lower_exclusive,
        upper_inclusive,
    }
}

#[test]
fn first_mileage_edge_has_no_lower_bound() {
    assert_eq!(
        resolve_bucket(BucketMetric::Mileage, Some(50_000)),
        range(None, Some(50_000))
    );
}

#[test]
fn later_mileage_edges_are_bounded_by_previous_edge() {
    assert_eq!(
        resolve_bucket(BucketMetric::Mileage, Some(100_000)),
        range(Some(50_000), Some(100_000))
    );
    assert_eq!(
        resolve_bucket(BucketMetric::Mileage, Some(150_000)),
        range(Some(100_000), Some(150_000))
    );
    assert_eq!(
        resolve_bucket(BucketMetric::Mileage, Some(200_000)),
        range(Some(150_000), Some(200_000))
    );
}

#[test]
fn mileage_between_edges_falls_into_catch_all() {
    // 70000 sits inside the second bucket numerically but is not an edge.
    assert_eq!(
        resolve_bucket(BucketMetric::Mileage, Some(70_000)),
        range(Some(200_000), None)
    );
    assert_eq!(
        resolve_bucket(BucketMetric::Mileage, Some(50_001)),
        range(Some(200_000), None)
    );
    assert_eq!(
        resolve_bucket(BucketMetric::Mileage, Some(0)),
        range(Some(200_000), None)
    );
}

#[test]
fn price_edges_follow_the_same_rule() {
    assert_eq!(
        resolve_bucket(BucketMetric::Price, Some(20_000)),
        range(None, Some(20_000))
    );
    assert_eq!(
        resolve_bucket(BucketMetric::Price, Some(40_000)),
        range(Some(20_000), Some(40_000))
    );
    assert_eq!(
        resolve_bucket(BucketMetric::Price, Some(60_000)),
        range(Some(40_000), Some(60_000))
    );
    assert_eq!(
        resolve_bucket(BucketMetric::Price, Some(80_000)),
        range(Some(60_000), Some(80_000))
    );
    assert_eq!(
        resolve_bucket(BucketMetric::Price, Some(30_000)),
        range(Some(80_000), None)
    );
}

#[test]
fn metrics_do_not_share_edges() {
    // A mileage edge is not a price edge.
    assert_eq!(
        resolve_bucket(BucketMetric::Price, Some(50_000)),
        range(Some(80_000), None)
    );
}

#[test]
fn unparsed_threshold_falls_into_catch_all() {
    assert_eq!(
        resolve_bucket(BucketMetric::Mileage, None),
        range(Some(200_000), None)
    );
}

#[test]
fn edge_value_belongs_to_the_lower_bucket() {
    let bucket = resolve_bucket(BucketMetric::Mileage, Some(100_000));
    assert!(bucket.contains(100_000));
    assert!(!bucket.contains(100_001));
    assert!(!bucket.contains(50_000));
    assert!(bucket.contains(50_001));
}

#[test]
fn range_renders_gt_and_lte() {
    let rendered = range(Some(50_000), Some(100_000)).to_document().unwrap();
    assert_eq!(rendered.get_i64("$gt").unwrap(), 50_000);
    assert_eq!(rendered.get_i64("$lte").unwrap(), 100_000);

    let catch_all = range(Some(200_000), None).to_document().unwrap();
    assert_eq!(catch_all.get_i64("$gt").unwrap(), 200_000);
    assert!(!catch_all.contains_key("$lte"));

    assert!(RangeCondition::default().to_document().is_none());
}
