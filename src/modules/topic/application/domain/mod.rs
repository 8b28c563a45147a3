pub mod entities;
pub mod validation;

pub use entities::{Topic, TopicId};
pub use validation::{validate_id, validate_topic, ValidationError};
