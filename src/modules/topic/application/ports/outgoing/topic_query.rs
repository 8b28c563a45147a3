use async_trait::async_trait;

use crate::topic::application::domain::{Topic, TopicId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the topics collection.
#[async_trait]
pub trait TopicQuery: Send + Sync {
    async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError>;

    async fn get_topic_by_id(&self, topic_id: &TopicId) -> Result<Option<Topic>, TopicQueryError>;
}
