use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::topic::application::domain::Topic;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Body of create and update requests.
///
/// Both fields are optional at the JSON level so that a missing field is
/// reported by the validator ("Title is required") instead of the JSON parser.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TopicRequest {
    #[schema(example = "The Breakfast Mistake", max_length = 100)]
    pub title: Option<String>,

    #[schema(example = "A funny movie.", max_length = 500)]
    pub description: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Response DTOs
// ──────────────────────────────────────────────────────────
//

/// A stored topic as exposed over HTTP
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(as = Topic)]
pub struct TopicResponse {
    #[serde(rename = "_id")]
    #[schema(example = "690c5f9b8c7388741280cead")]
    pub id: String,

    #[schema(example = "The Breakfast Mistake")]
    pub title: String,

    #[schema(example = "A funny movie.")]
    pub description: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<Topic> for TopicResponse {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id.into(),
            title: topic.title,
            description: topic.description,
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicWithMessageResponse {
    #[schema(example = "Topic Created")]
    pub message: String,
    pub topic: TopicResponse,
}

impl TopicWithMessageResponse {
    pub fn new(message: &str, topic: Topic) -> Self {
        Self {
            message: message.to_string(),
            topic: topic.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicListResponse {
    pub topics: Vec<TopicResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SingleTopicResponse {
    pub topic: TopicResponse,
}
