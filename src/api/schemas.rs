// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Body of every failed request
#[derive(Serialize, ToSchema)]
#[schema(as = Error)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Invalid ID format")]
    pub error: String,
}

/// Body of operations that only report an outcome
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Topic deleted")]
    pub message: String,
}
