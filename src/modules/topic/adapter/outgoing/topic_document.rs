use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::modules::topic::application::domain::{Topic, TopicId, ValidationError};

pub const TOPICS_COLLECTION: &str = "topics";

/// Shape of a topic inside the `topics` collection.
///
/// Extra fields written by other clients (e.g. `__v`) are ignored on read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopicDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub title: String,

    pub description: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime,
}

impl TopicDocument {
    pub fn new(title: String, description: String) -> Self {
        let now = DateTime::now();
        Self {
            id: ObjectId::new(),
            title,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_topic(self) -> Result<Topic, ValidationError> {
        Ok(Topic {
            id: TopicId::parse(&self.id.to_hex())?,
            title: self.title,
            description: self.description,
            created_at: self.created_at.to_chrono(),
            updated_at: self.updated_at.to_chrono(),
        })
    }
}

pub fn object_id(topic_id: &TopicId) -> Result<ObjectId, bson::oid::Error> {
    ObjectId::parse_str(topic_id.as_str())
}
