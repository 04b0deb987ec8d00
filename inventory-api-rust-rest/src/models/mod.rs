pub mod car;
pub mod dealership;
pub mod review;
pub mod stored;

pub use car::Car;
pub use dealership::Dealership;
pub use review::{NewReview, Review};
pub use stored::Stored;
