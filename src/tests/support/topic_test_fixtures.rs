use chrono::{TimeZone, Utc};

use crate::topic::application::domain::{Topic, TopicId};

pub const SAMPLE_TOPIC_ID: &str = "690c5f9b8c7388741280cead";

pub fn sample_topic(id: &str, title: &str, description: &str) -> Topic {
    let created_at = Utc.with_ymd_and_hms(2025, 11, 6, 8, 30, 0).unwrap();

    Topic {
        id: TopicId::parse(id).unwrap(),
        title: title.to_string(),
        description: description.to_string(),
        created_at,
        updated_at: created_at,
    }
}

pub fn default_topic() -> Topic {
    sample_topic(SAMPLE_TOPIC_ID, "Test", "Test Desc")
}
