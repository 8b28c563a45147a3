use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::modules::topic::application::domain::{Topic, TopicId};
use crate::modules::topic::application::ports::outgoing::{
    CreateTopicData, TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
    UpdateTopicData,
};

#[derive(Debug, Default)]
struct StoreState {
    next_id: u64,
    topics: Vec<Topic>,
}

/// Document-store stand-in used by the end-to-end route tests.
///
/// Clones share the same backing state, so one instance can be handed to both
/// the write-side and read-side services. Ids start at 1, which keeps
/// `000000000000000000000000` permanently absent.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTopicStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryTopicStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().topics.len()
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopicStore {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;

        let id = TopicId::parse(&format!("{:024x}", state.next_id))
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;
        let now = Utc::now();

        let topic = Topic {
            id,
            title: data.title,
            description: data.description,
            created_at: now,
            updated_at: now,
        };
        state.topics.push(topic.clone());

        Ok(topic)
    }

    async fn update_topic(
        &self,
        topic_id: &TopicId,
        data: UpdateTopicData,
    ) -> Result<Topic, TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();

        let topic = state
            .topics
            .iter_mut()
            .find(|t| &t.id == topic_id)
            .ok_or(TopicRepositoryError::TopicNotFound)?;

        topic.title = data.title;
        topic.description = data.description;
        topic.updated_at = Utc::now();

        Ok(topic.clone())
    }

    async fn delete_topic(&self, topic_id: &TopicId) -> Result<(), TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();

        let position = state
            .topics
            .iter()
            .position(|t| &t.id == topic_id)
            .ok_or(TopicRepositoryError::TopicNotFound)?;
        state.topics.remove(position);

        Ok(())
    }
}

#[async_trait]
impl TopicQuery for InMemoryTopicStore {
    async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError> {
        Ok(self.state.lock().unwrap().topics.clone())
    }

    async fn get_topic_by_id(&self, topic_id: &TopicId) -> Result<Option<Topic>, TopicQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state.topics.iter().find(|t| &t.id == topic_id).cloned())
    }
}
