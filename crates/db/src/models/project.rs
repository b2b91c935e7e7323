//! Project entity model and DTOs.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

/// Card image applied when a project is created without one.
pub const DEFAULT_PROJECT_IMAGE: &str =
    "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=600&auto=format&fit=crop";

/// A project document from the `projects` collection.
///
/// Text fields a caller omitted at creation time are stored as absent
/// and stay absent in responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned identity, exposed to callers as a hex string.
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    pub image: String,
}

/// DTO for creating a new project. Any subset of fields may be supplied;
/// a missing `image` falls back to [`DEFAULT_PROJECT_IMAGE`] at insert.
///
/// Also serializable so the Mongo backend can insert it directly,
/// letting the store assign the identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CreateProject {
    /// Resolve the `image` default in place. Called before persisting so
    /// the stored document always carries an image URL.
    pub fn apply_defaults(&mut self) {
        self.image
            .get_or_insert_with(|| DEFAULT_PROJECT_IMAGE.to_string());
    }

    /// Materialize the stored record under the given identity.
    pub fn into_project(self, id: ObjectId) -> Project {
        Project {
            id,
            title: self.title,
            category: self.category,
            desc: self.desc,
            tags: self.tags,
            image: self
                .image
                .unwrap_or_else(|| DEFAULT_PROJECT_IMAGE.to_string()),
        }
    }
}
