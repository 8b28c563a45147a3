use async_trait::async_trait;

use crate::topic::application::{
    domain::Topic,
    ports::{
        incoming::use_cases::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase},
        outgoing::{CreateTopicData, TopicRepository},
    },
};

#[derive(Debug, Clone)]
pub struct CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTopicUseCase for CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError> {
        let data = CreateTopicData {
            title: command.title().to_string(),
            description: command.description().to_string(),
        };

        self.repository
            .create_topic(data)
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))
    }
}
