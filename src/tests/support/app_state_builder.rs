use crate::modules::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetTopicUseCase, GetTopicsUseCase, UpdateTopicUseCase,
};
use crate::modules::topic::application::topic_use_cases::TopicUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    topic: TopicUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            topic: TopicUseCases {
                create: Arc::new(StubCreateTopicUseCase::default()),
                get_list: Arc::new(StubGetTopicsUseCase::success(vec![])),
                get_single: Arc::new(StubGetTopicUseCase::not_found()),
                update: Arc::new(StubUpdateTopicUseCase::default()),
                delete: Arc::new(StubDeleteTopicUseCase::not_found()),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_topic(
        mut self,
        uc: impl CreateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.create = Arc::new(uc);
        self
    }

    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + Send + Sync + 'static) -> Self {
        self.topic.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_topic(mut self, uc: impl GetTopicUseCase + Send + Sync + 'static) -> Self {
        self.topic.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_topic(
        mut self,
        uc: impl UpdateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.update = Arc::new(uc);
        self
    }

    pub fn with_delete_topic(
        mut self,
        uc: impl DeleteTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState { topic: self.topic })
    }
}
