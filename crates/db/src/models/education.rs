//! Education entity model and DTOs.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

/// An education document from the `education` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    /// Store-assigned identity, exposed to callers as a hex string.
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inst: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// DTO for creating a new education record. Any subset of fields may be
/// supplied; omitted fields are stored as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEducation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inst: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CreateEducation {
    /// Materialize the stored record under the given identity.
    pub fn into_education(self, id: ObjectId) -> Education {
        Education {
            id,
            degree: self.degree,
            inst: self.inst,
            year: self.year,
            status: self.status,
        }
    }
}
