use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use super::topic_dto::{TopicRequest, TopicWithMessageResponse};
use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::{CreateTopicCommand, CreateTopicError},
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a topic
#[utoipa::path(
    post,
    path = "/api/topics",
    tag = "topics",
    request_body = TopicRequest,
    responses(
        (status = 201, description = "Topic created", body = TopicWithMessageResponse),
        (
            status = 400,
            description = "Invalid input data",
            body = ErrorResponse,
            example = json!({ "error": "Title is required" })
        ),
    )
)]
#[post("/api/topics")]
pub async fn create_topic_handler(
    data: web::Data<AppState>,
    payload: web::Json<TopicRequest>,
) -> impl Responder {
    let TopicRequest { title, description } = payload.into_inner();

    // 1️⃣ Build command (validation happens here)
    let command = match CreateTopicCommand::new(title, description) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(error = %err, "Create topic rejected");
            return ApiResponse::bad_request(&err.to_string());
        }
    };

    // 2️⃣ Execute use case
    match data.topic.create.execute(command).await {
        Ok(topic) => {
            info!(topic_id = %topic.id, "Topic created");
            ApiResponse::created(TopicWithMessageResponse::new("Topic Created", topic))
        }
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_topic_error(err: CreateTopicError) -> actix_web::HttpResponse {
    match err {
        CreateTopicError::RepositoryError(ref msg) => {
            error!(error = %msg, "Failed to create topic");
            ApiResponse::bad_request(&err.to_string())
        }
    }
}
