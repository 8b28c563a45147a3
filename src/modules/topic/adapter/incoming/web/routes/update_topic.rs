use actix_web::{put, web, Responder};
use tracing::{error, info, warn};

use super::topic_dto::{TopicRequest, TopicWithMessageResponse};
use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    topic::application::{
        domain::TopicId,
        ports::incoming::use_cases::{UpdateTopicCommand, UpdateTopicError},
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Update a topic by ID
///
/// Title and description are both replaced.
#[utoipa::path(
    put,
    path = "/api/topics/{id}",
    tag = "topics",
    params(
        ("id" = String, Path, description = "Topic ID", example = "690c5f9b8c7388741280cead")
    ),
    request_body = TopicRequest,
    responses(
        (
            status = 200,
            description = "Topic updated successfully",
            body = TopicWithMessageResponse,
            example = json!({
                "message": "Topic updated successfully",
                "topic": {
                    "_id": "690c5f9b8c7388741280cead",
                    "title": "Updated Title",
                    "description": "Updated description",
                    "createdAt": "2025-11-06T08:30:00Z",
                    "updatedAt": "2025-11-07T10:00:00Z"
                }
            })
        ),
        (status = 400, description = "Invalid input data", body = ErrorResponse),
        (
            status = 404,
            description = "Topic not found",
            body = ErrorResponse,
            example = json!({ "error": "Topic not found" })
        ),
    )
)]
#[put("/api/topics/{id}")]
pub async fn update_topic_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: Result<web::Json<TopicRequest>, actix_web::Error>,
) -> impl Responder {
    // 1️⃣ Identifier first, then body
    let topic_id = match TopicId::parse(&path.into_inner()) {
        Ok(id) => id,
        Err(err) => {
            warn!(error = %err, "Update topic rejected");
            return ApiResponse::bad_request(&err.to_string());
        }
    };

    let TopicRequest { title, description } = match payload {
        Ok(body) => body.into_inner(),
        Err(err) => {
            warn!(error = %err, "Update topic rejected: malformed body");
            return ApiResponse::bad_request(&err.to_string());
        }
    };
    let command = match UpdateTopicCommand::new(topic_id, title, description) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(error = %err, "Update topic rejected");
            return ApiResponse::bad_request(&err.to_string());
        }
    };

    // 2️⃣ Execute use case
    match data.topic.update.execute(command).await {
        Ok(topic) => {
            info!(topic_id = %topic.id, "Topic updated");
            ApiResponse::success(TopicWithMessageResponse::new(
                "Topic updated successfully",
                topic,
            ))
        }
        Err(err) => map_update_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_update_topic_error(err: UpdateTopicError) -> actix_web::HttpResponse {
    match err {
        UpdateTopicError::TopicNotFound => {
            warn!("Update topic: topic not found");
            ApiResponse::not_found("Topic not found")
        }
        UpdateTopicError::RepositoryError(ref msg) => {
            error!(error = %msg, "Failed to update topic");
            ApiResponse::bad_request(&err.to_string())
        }
    }
}
