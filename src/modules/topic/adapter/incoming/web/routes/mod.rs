mod create_topic;
mod delete_topic;
mod get_topic;
mod get_topics;
mod topic_dto;
mod update_topic;

pub use create_topic::*;
pub use delete_topic::*;
pub use get_topic::*;
pub use get_topics::*;
pub use topic_dto::{
    SingleTopicResponse, TopicListResponse, TopicRequest, TopicResponse,
    TopicWithMessageResponse,
};
pub use update_topic::*;
