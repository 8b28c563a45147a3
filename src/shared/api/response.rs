// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::api::schemas::ErrorResponse;

/// Builds the JSON responses returned by every handler.
///
/// Success bodies are passed through as-is; every failure is rendered as
/// `{"error": "<message>"}`.
pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(body: T) -> HttpResponse {
        HttpResponse::Ok().json(body)
    }

    pub fn created<T: Serialize>(body: T) -> HttpResponse {
        HttpResponse::Created().json(body)
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorResponse {
            error: message.to_string(),
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_error(message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}
