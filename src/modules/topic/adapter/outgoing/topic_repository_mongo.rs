use async_trait::async_trait;
use bson::{doc, DateTime};
use mongodb::{options::ReturnDocument, Collection};
use std::sync::Arc;

use crate::modules::topic::application::domain::{Topic, TopicId};
use crate::modules::topic::application::ports::outgoing::{
    CreateTopicData, TopicRepository, TopicRepositoryError, UpdateTopicData,
};
use crate::shared::db::MongoConnection;

use super::topic_document::{object_id, TopicDocument, TOPICS_COLLECTION};

#[derive(Debug, Clone)]
pub struct TopicRepositoryMongo {
    connection: Arc<MongoConnection>,
}

impl TopicRepositoryMongo {
    pub fn new(connection: Arc<MongoConnection>) -> Self {
        Self { connection }
    }

    async fn collection(&self) -> Result<Collection<TopicDocument>, TopicRepositoryError> {
        let database = self
            .connection
            .database()
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        Ok(database.collection::<TopicDocument>(TOPICS_COLLECTION))
    }
}

fn to_topic(document: TopicDocument) -> Result<Topic, TopicRepositoryError> {
    document
        .into_topic()
        .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))
}

fn filter_by_id(topic_id: &TopicId) -> Result<bson::Document, TopicRepositoryError> {
    let oid = object_id(topic_id).map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;
    Ok(doc! { "_id": oid })
}

#[async_trait]
impl TopicRepository for TopicRepositoryMongo {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        let document = TopicDocument::new(data.title, data.description);

        self.collection()
            .await?
            .insert_one(&document)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        to_topic(document)
    }

    async fn update_topic(
        &self,
        topic_id: &TopicId,
        data: UpdateTopicData,
    ) -> Result<Topic, TopicRepositoryError> {
        let filter = filter_by_id(topic_id)?;
        let update = doc! {
            "$set": {
                "title": data.title,
                "description": data.description,
                "updatedAt": DateTime::now(),
            }
        };

        let updated = self
            .collection()
            .await?
            .find_one_and_update(filter, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        match updated {
            Some(document) => to_topic(document),
            None => Err(TopicRepositoryError::TopicNotFound),
        }
    }

    async fn delete_topic(&self, topic_id: &TopicId) -> Result<(), TopicRepositoryError> {
        let filter = filter_by_id(topic_id)?;

        let deleted = self
            .collection()
            .await?
            .find_one_and_delete(filter)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        match deleted {
            Some(_) => Ok(()),
            None => Err(TopicRepositoryError::TopicNotFound),
        }
    }
}
