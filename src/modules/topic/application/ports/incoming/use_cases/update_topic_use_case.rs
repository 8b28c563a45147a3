use async_trait::async_trait;

use crate::topic::application::domain::{validate_topic, Topic, TopicId, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Update Topic Command
// ──────────────────────────────────────────────────────────
//

/// Full replacement of a topic's editable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTopicCommand {
    topic_id: TopicId,
    title: String,
    description: String,
}

impl UpdateTopicCommand {
    pub fn new(
        topic_id: TopicId,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        validate_topic(title.as_deref(), description.as_deref())?;

        Ok(Self {
            topic_id,
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
        })
    }

    pub fn topic_id(&self) -> &TopicId {
        &self.topic_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(&self, command: UpdateTopicCommand) -> Result<Topic, UpdateTopicError>;
}
