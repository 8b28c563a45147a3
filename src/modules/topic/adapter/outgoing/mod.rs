mod topic_document;
mod topic_query_mongo;
mod topic_repository_mongo;

pub use topic_document::{TopicDocument, TOPICS_COLLECTION};
pub use topic_query_mongo::TopicQueryMongo;
pub use topic_repository_mongo::TopicRepositoryMongo;
