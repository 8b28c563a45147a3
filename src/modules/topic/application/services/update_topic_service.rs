use async_trait::async_trait;

use crate::topic::application::{
    domain::Topic,
    ports::incoming::use_cases::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase},
    ports::outgoing::{TopicRepository, TopicRepositoryError, UpdateTopicData},
};

#[derive(Debug, Clone)]
pub struct UpdateTopicService<R>
where
    R: TopicRepository,
{
    repository: R,
}

impl<R> UpdateTopicService<R>
where
    R: TopicRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateTopicUseCase for UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateTopicCommand) -> Result<Topic, UpdateTopicError> {
        let data = UpdateTopicData {
            title: command.title().to_string(),
            description: command.description().to_string(),
        };

        self.repository
            .update_topic(command.topic_id(), data)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => UpdateTopicError::TopicNotFound,
                TopicRepositoryError::DatabaseError(msg) => UpdateTopicError::RepositoryError(msg),
            })
    }
}
