use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dealership {
    pub id: i64,
    pub city: String,
    pub state: String,
    pub address: String,
    pub zip: String,
    pub lat: String,
    pub long: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    pub full_name: String,
}
