use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

/// A record as read back from the store, carrying its `_id`.
///
/// The identifier is rendered as a hex string in JSON responses. Records are
/// always written without an `_id`, so this type is never serialized into BSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Stored<T> {
    pub fn new(id: ObjectId, record: T) -> Self {
        Self { id, record }
    }

    pub fn into_record(self) -> T {
        self.record
    }
}
