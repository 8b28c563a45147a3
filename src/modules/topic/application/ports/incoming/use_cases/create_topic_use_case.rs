use async_trait::async_trait;

use crate::topic::application::domain::{validate_topic, Topic, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTopicCommand {
    title: String,
    description: String,
}

impl CreateTopicCommand {
    pub fn new(
        title: Option<String>,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        validate_topic(title.as_deref(), description.as_deref())?;

        Ok(Self {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
        })
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
pub enum CreateTopicError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError>;
}
