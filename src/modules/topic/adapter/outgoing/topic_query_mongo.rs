use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::Collection;
use std::sync::Arc;

use crate::modules::topic::application::domain::{Topic, TopicId};
use crate::modules::topic::application::ports::outgoing::{TopicQuery, TopicQueryError};
use crate::shared::db::MongoConnection;

use super::topic_document::{object_id, TopicDocument, TOPICS_COLLECTION};

#[derive(Debug, Clone)]
pub struct TopicQueryMongo {
    connection: Arc<MongoConnection>,
}

impl TopicQueryMongo {
    pub fn new(connection: Arc<MongoConnection>) -> Self {
        Self { connection }
    }

    async fn collection(&self) -> Result<Collection<TopicDocument>, TopicQueryError> {
        let database = self
            .connection
            .database()
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(database.collection::<TopicDocument>(TOPICS_COLLECTION))
    }
}

fn to_topic(document: TopicDocument) -> Result<Topic, TopicQueryError> {
    document
        .into_topic()
        .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))
}

#[async_trait]
impl TopicQuery for TopicQueryMongo {
    // Natural store order; no sort is applied.
    async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError> {
        let documents: Vec<TopicDocument> = self
            .collection()
            .await?
            .find(doc! {})
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        documents.into_iter().map(to_topic).collect()
    }

    async fn get_topic_by_id(&self, topic_id: &TopicId) -> Result<Option<Topic>, TopicQueryError> {
        let oid =
            object_id(topic_id).map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        let document = self
            .collection()
            .await?
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        document.map(to_topic).transpose()
    }
}
