use async_trait::async_trait;

use crate::topic::application::domain::TopicId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    async fn execute(&self, topic_id: TopicId) -> Result<(), DeleteTopicError>;
}
