use async_trait::async_trait;

use crate::topic::application::domain::{Topic, TopicId};

// Input DTO for creating a topic
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTopicData {
    pub title: String,
    pub description: String,
}

// Replacement values for an update; both fields are overwritten
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTopicData {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError>;

    /// Returns the document as it is after the update.
    async fn update_topic(
        &self,
        topic_id: &TopicId,
        data: UpdateTopicData,
    ) -> Result<Topic, TopicRepositoryError>;

    async fn delete_topic(&self, topic_id: &TopicId) -> Result<(), TopicRepositoryError>;
}
