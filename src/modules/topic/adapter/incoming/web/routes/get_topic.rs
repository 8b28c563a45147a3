use actix_web::{get, web, Responder};
use tracing::{error, warn};

use super::topic_dto::SingleTopicResponse;
use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    topic::application::{domain::TopicId, ports::incoming::use_cases::GetTopicError},
    AppState,
};

/// Get a topic by ID
#[utoipa::path(
    get,
    path = "/api/topics/{id}",
    tag = "topics",
    params(
        ("id" = String, Path, description = "Topic ID", example = "690c5f9b8c7388741280cead")
    ),
    responses(
        (status = 200, description = "Topic retrieved successfully", body = SingleTopicResponse),
        (
            status = 400,
            description = "Invalid ID supplied",
            body = ErrorResponse,
            example = json!({ "error": "Invalid ID format" })
        ),
        (
            status = 404,
            description = "Topic not found",
            body = ErrorResponse,
            example = json!({ "error": "Topic not found" })
        ),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/topics/{id}")]
pub async fn get_topic_by_id_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let topic_id = match TopicId::parse(&path.into_inner()) {
        Ok(id) => id,
        Err(err) => {
            warn!(error = %err, "Get topic rejected");
            return ApiResponse::bad_request(&err.to_string());
        }
    };

    match data.topic.get_single.execute(topic_id).await {
        Ok(topic) => ApiResponse::success(SingleTopicResponse {
            topic: topic.into(),
        }),
        Err(err) => map_get_topic_error(err),
    }
}

fn map_get_topic_error(err: GetTopicError) -> actix_web::HttpResponse {
    match err {
        GetTopicError::TopicNotFound => ApiResponse::not_found("Topic not found"),
        GetTopicError::QueryFailed(ref msg) => {
            error!(error = %msg, "Failed to fetch topic");
            ApiResponse::internal_error(&err.to_string())
        }
    }
}
