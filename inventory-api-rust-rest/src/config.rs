use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub database_name: String,
    pub server_port: u16,
    pub log_level: String,
    pub car_seed_file: PathBuf,
    pub dealership_seed_file: Option<PathBuf>,
    pub review_seed_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Config {
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017/".to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "dealershipsDB".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3050".to_string())
                .parse()
                .unwrap_or(3050),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            car_seed_file: env::var("CAR_SEED_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/car_records.json")),
            dealership_seed_file: optional_path("DEALERSHIP_SEED_FILE"),
            review_seed_file: optional_path("REVIEW_SEED_FILE"),
        })
    }
}

// Unset or blank means "do not seed this collection".
fn optional_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
