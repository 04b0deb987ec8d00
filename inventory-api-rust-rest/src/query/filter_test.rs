use mongodb::bson::doc;

use super::bucket::BucketMetric;
use super::filter::CarFilter;
use crate::models::Car;

fn corolla() -> Car {
    Car::new(1, "Toyota", "Corolla", "Sedan", 2018, 45_000).with_price(18_000)
}

#[test]
fn base_filter_only_constrains_dealer() {
    assert_eq!(CarFilter::for_dealer(7).to_document(), doc! { "dealer_id": 7_i64 });
}

#[test]
fn make_and_model_become_equality_constraints() {
    let filter = CarFilter::for_dealer(1).with_make("Toyota").with_model("Corolla");
    assert_eq!(
        filter.to_document(),
        doc! { "dealer_id": 1_i64, "make": "Toyota", "model": "Corolla" }
    );
}

#[test]
fn mileage_bucket_is_rendered_under_mileage_field() {
    let filter = CarFilter::for_dealer(1).with_bucket(BucketMetric::Mileage, Some(100_000));
    assert_eq!(
        filter.to_document(),
        doc! { "dealer_id": 1_i64, "mileage": { "$lte": 100_000_i64, "$gt": 50_000_i64 } }
    );
}

#[test]
fn price_catch_all_is_rendered_under_price_field() {
    let filter = CarFilter::for_dealer(1).with_bucket(BucketMetric::Price, Some(12_345));
    assert_eq!(
        filter.to_document(),
        doc! { "dealer_id": 1_i64, "price": { "$gt": 80_000_i64 } }
    );
}

#[test]
fn year_floor_is_inclusive() {
    let filter = CarFilter::for_dealer(1).with_year_floor(1900);
    assert_eq!(
        filter.to_document(),
        doc! { "dealer_id": 1_i64, "year": { "$gte": 1900 } }
    );

    assert!(CarFilter::for_dealer(1).with_year_floor(2018).matches(&corolla()));
    assert!(!CarFilter::for_dealer(1).with_year_floor(2019).matches(&corolla()));
}

#[test]
fn combined_constraints_are_conjunctive() {
    let filter = CarFilter::for_dealer(1)
        .with_make("Toyota")
        .with_bucket(BucketMetric::Mileage, Some(50_000))
        .with_bucket(BucketMetric::Price, Some(20_000))
        .with_year_floor(2015);

    assert!(filter.matches(&corolla()));
    assert!(!filter.clone().with_model("Camry").matches(&corolla()));

    let mut other_dealer = corolla();
    other_dealer.dealer_id = 2;
    assert!(!filter.matches(&other_dealer));

    let mut high_mileage = corolla();
    high_mileage.mileage = 60_000;
    assert!(!filter.matches(&high_mileage));
}

#[test]
fn car_without_price_never_matches_a_price_bucket() {
    let unpriced = Car::new(1, "Toyota", "Corolla", "Sedan", 2018, 45_000);
    let filter = CarFilter::for_dealer(1).with_bucket(BucketMetric::Price, Some(20_000));
    assert!(!filter.matches(&unpriced));

    let catch_all = CarFilter::for_dealer(1).with_bucket(BucketMetric::Price, None);
    assert!(!catch_all.matches(&unpriced));
}

#[test]
fn make_comparison_is_case_sensitive() {
    let filter = CarFilter::for_dealer(1).with_make("toyota");
    assert!(!filter.matches(&corolla()));
}
