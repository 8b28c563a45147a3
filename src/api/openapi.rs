use crate::api::schemas::{ErrorResponse, MessageResponse};
use utoipa::OpenApi;

use crate::topic::adapter::incoming::web::routes::{
    SingleTopicResponse, TopicListResponse, TopicRequest, TopicResponse,
    TopicWithMessageResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie Watchlist System API",
        version = "1.0.0",
        description = "CRUD API for the topics (movie entries) of a watchlist"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::get_topic_by_id_handler,
        crate::topic::adapter::incoming::web::routes::update_topic_handler,
        crate::topic::adapter::incoming::web::routes::delete_topic_handler,
        crate::topic::adapter::incoming::web::routes::delete_topic_by_id_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,

            // Topic DTOs
            TopicRequest,
            TopicResponse,
            TopicWithMessageResponse,
            TopicListResponse,
            SingleTopicResponse
        )
    ),
    tags(
        (name = "topics", description = "Watchlist topic management endpoints"),
    )
)]
pub struct ApiDoc;
