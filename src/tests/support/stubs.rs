use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::modules::topic::application::domain::{Topic, TopicId};
use crate::modules::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, DeleteTopicError,
    DeleteTopicUseCase, GetTopicError, GetTopicUseCase, GetTopicsError, GetTopicsUseCase,
    UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase,
};
use crate::tests::support::topic_test_fixtures::SAMPLE_TOPIC_ID;

/// Shared invocation counter so tests can assert a use case was (not) reached.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

// ============================================================
// Create
// ============================================================

/// Echoes the command back as a stored topic unless configured to fail.
#[derive(Default, Clone)]
pub struct StubCreateTopicUseCase {
    failure: Option<CreateTopicError>,
    pub calls: CallCounter,
}

impl StubCreateTopicUseCase {
    pub fn repo_error(msg: &str) -> Self {
        Self {
            failure: Some(CreateTopicError::RepositoryError(msg.to_string())),
            calls: CallCounter::default(),
        }
    }
}

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError> {
        self.calls.hit();
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let now = Utc::now();
        Ok(Topic {
            id: TopicId::parse(SAMPLE_TOPIC_ID).unwrap(),
            title: command.title().to_string(),
            description: command.description().to_string(),
            created_at: now,
            updated_at: now,
        })
    }
}

// ============================================================
// List
// ============================================================

#[derive(Clone)]
pub struct StubGetTopicsUseCase {
    result: Result<Vec<Topic>, GetTopicsError>,
}

impl StubGetTopicsUseCase {
    pub fn success(data: Vec<Topic>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicsError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(&self) -> Result<Vec<Topic>, GetTopicsError> {
        self.result.clone()
    }
}

// ============================================================
// Get single
// ============================================================

#[derive(Clone)]
pub struct StubGetTopicUseCase {
    result: Result<Topic, GetTopicError>,
    pub calls: CallCounter,
}

impl StubGetTopicUseCase {
    pub fn found(topic: Topic) -> Self {
        Self {
            result: Ok(topic),
            calls: CallCounter::default(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetTopicError::TopicNotFound),
            calls: CallCounter::default(),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicError::QueryFailed(msg.into())),
            calls: CallCounter::default(),
        }
    }
}

#[async_trait]
impl GetTopicUseCase for StubGetTopicUseCase {
    async fn execute(&self, _topic_id: TopicId) -> Result<Topic, GetTopicError> {
        self.calls.hit();
        self.result.clone()
    }
}

// ============================================================
// Update
// ============================================================

/// Applies the command to a fresh topic unless configured to fail.
#[derive(Default, Clone)]
pub struct StubUpdateTopicUseCase {
    failure: Option<UpdateTopicError>,
    pub calls: CallCounter,
}

impl StubUpdateTopicUseCase {
    pub fn not_found() -> Self {
        Self {
            failure: Some(UpdateTopicError::TopicNotFound),
            calls: CallCounter::default(),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            failure: Some(UpdateTopicError::RepositoryError(msg.to_string())),
            calls: CallCounter::default(),
        }
    }
}

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(&self, command: UpdateTopicCommand) -> Result<Topic, UpdateTopicError> {
        self.calls.hit();
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let now = Utc::now();
        Ok(Topic {
            id: command.topic_id().clone(),
            title: command.title().to_string(),
            description: command.description().to_string(),
            created_at: now,
            updated_at: now,
        })
    }
}

// ============================================================
// Delete
// ============================================================

#[derive(Clone)]
pub struct StubDeleteTopicUseCase {
    result: Result<(), DeleteTopicError>,
    pub calls: CallCounter,
}

impl StubDeleteTopicUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(()),
            calls: CallCounter::default(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(DeleteTopicError::TopicNotFound),
            calls: CallCounter::default(),
        }
    }

    pub fn db_error(msg: &str) -> Self {
        Self {
            result: Err(DeleteTopicError::DatabaseError(msg.to_string())),
            calls: CallCounter::default(),
        }
    }
}

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _topic_id: TopicId) -> Result<(), DeleteTopicError> {
        self.calls.hit();
        self.result.clone()
    }
}
