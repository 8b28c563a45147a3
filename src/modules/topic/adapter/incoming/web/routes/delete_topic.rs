// src/modules/topic/adapter/incoming/web/routes/delete_topic.rs
use actix_web::{delete, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::IntoParams;

use crate::{
    api::schemas::{ErrorResponse, MessageResponse},
    shared::api::ApiResponse,
    topic::application::{domain::TopicId, ports::incoming::use_cases::DeleteTopicError},
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteTopicQuery {
    /// Topic ID
    #[param(example = "690c5f9b8c7388741280cead")]
    pub id: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Delete a topic by ID (query string)
#[utoipa::path(
    delete,
    path = "/api/topics",
    tag = "topics",
    params(DeleteTopicQuery),
    responses(
        (
            status = 200,
            description = "Topic deleted",
            body = MessageResponse,
            example = json!({ "message": "Topic deleted" })
        ),
        (
            status = 400,
            description = "Missing or invalid ID",
            body = ErrorResponse,
            example = json!({ "error": "ID is required" })
        ),
        (status = 404, description = "Topic not found", body = ErrorResponse),
    )
)]
#[delete("/api/topics")]
pub async fn delete_topic_handler(
    data: web::Data<AppState>,
    query: web::Query<DeleteTopicQuery>,
) -> impl Responder {
    let raw_id = query.into_inner().id.unwrap_or_default();
    delete_topic(&data, &raw_id).await
}

/// Delete a topic by ID (path)
#[utoipa::path(
    delete,
    path = "/api/topics/{id}",
    tag = "topics",
    params(
        ("id" = String, Path, description = "Topic ID", example = "690c5f9b8c7388741280cead")
    ),
    responses(
        (status = 200, description = "Topic deleted", body = MessageResponse),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
    )
)]
#[delete("/api/topics/{id}")]
pub async fn delete_topic_by_id_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    delete_topic(&data, &path.into_inner()).await
}

async fn delete_topic(data: &AppState, raw_id: &str) -> HttpResponse {
    let topic_id = match TopicId::parse(raw_id) {
        Ok(id) => id,
        Err(err) => {
            warn!(error = %err, "Delete topic rejected");
            return ApiResponse::bad_request(&err.to_string());
        }
    };

    match data.topic.delete.execute(topic_id.clone()).await {
        Ok(()) => {
            info!(topic_id = %topic_id, "Topic deleted");
            ApiResponse::success(MessageResponse {
                message: "Topic deleted".to_string(),
            })
        }
        Err(err) => map_delete_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_delete_topic_error(err: DeleteTopicError) -> HttpResponse {
    match err {
        DeleteTopicError::TopicNotFound => ApiResponse::not_found("Topic not found"),
        DeleteTopicError::DatabaseError(ref msg) => {
            error!(error = %msg, "Failed to delete topic");
            ApiResponse::bad_request(&err.to_string())
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
