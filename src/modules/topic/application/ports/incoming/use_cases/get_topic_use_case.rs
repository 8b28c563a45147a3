use async_trait::async_trait;

use crate::topic::application::domain::{Topic, TopicId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicUseCase: Send + Sync {
    async fn execute(&self, topic_id: TopicId) -> Result<Topic, GetTopicError>;
}
