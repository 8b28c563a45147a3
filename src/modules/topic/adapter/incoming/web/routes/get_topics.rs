use actix_web::{get, web, Responder};
use tracing::error;

use super::topic_dto::{TopicListResponse, TopicResponse};
use crate::{
    api::schemas::ErrorResponse, shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::GetTopicsError, AppState,
};

/// List all topics
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "topics",
    responses(
        (status = 200, description = "All stored topics", body = TopicListResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/topics")]
pub async fn get_topics_handler(data: web::Data<AppState>) -> impl Responder {
    match data.topic.get_list.execute().await {
        Ok(topics) => {
            let topics = topics.into_iter().map(TopicResponse::from).collect();
            ApiResponse::success(TopicListResponse { topics })
        }

        Err(err) => map_get_topics_error(err),
    }
}

fn map_get_topics_error(err: GetTopicsError) -> actix_web::HttpResponse {
    match err {
        GetTopicsError::QueryFailed(ref msg) => {
            error!(error = %msg, "Failed to list topics");
            ApiResponse::internal_error(&err.to_string())
        }
    }
}
