pub const API_NAME: &str = "[inventory-api-rust-rest]";

pub const CARS_COLLECTION: &str = "cars";
pub const DEALERSHIPS_COLLECTION: &str = "dealerships";
pub const REVIEWS_COLLECTION: &str = "reviews";

/// Upper edges of the mileage buckets, ascending.
pub const MILEAGE_BUCKET_EDGES: [i64; 4] = [50_000, 100_000, 150_000, 200_000];

/// Upper edges of the price buckets, ascending.
pub const PRICE_BUCKET_EDGES: [i64; 4] = [20_000, 40_000, 60_000, 80_000];

pub const MIN_MODEL_YEAR: i32 = 1900;
