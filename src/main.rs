pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::topic;

use crate::api::openapi::ApiDoc;
use crate::config::{load_env_files, AppConfig};
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::shared::db::MongoConnection;
use crate::topic::adapter::outgoing::{TopicQueryMongo, TopicRepositoryMongo};
use crate::topic::application::services::{
    CreateTopicService, DeleteTopicService, GetTopicService, GetTopicsService, UpdateTopicService,
};
use crate::topic::application::topic_use_cases::TopicUseCases;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_env_files();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    let server_url = config.server_url();
    info!(server_url = %server_url, database = %config.mongodb_database, "Configuration loaded");

    // Connects lazily on first use
    let mongo = Arc::new(MongoConnection::new(
        config.mongodb_uri.clone(),
        config.mongodb_database.clone(),
    ));

    let topic_repo = TopicRepositoryMongo::new(Arc::clone(&mongo));
    let topic_query = TopicQueryMongo::new(Arc::clone(&mongo));

    let state = AppState {
        topic: TopicUseCases {
            create: Arc::new(CreateTopicService::new(topic_repo.clone())),
            get_list: Arc::new(GetTopicsService::new(topic_query.clone())),
            get_single: Arc::new(GetTopicService::new(topic_query)),
            update: Arc::new(UpdateTopicService::new(topic_repo.clone())),
            delete: Arc::new(DeleteTopicService::new(topic_repo)),
        },
    };

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&mongo)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topic_by_id_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::update_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::delete_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::delete_topic_by_id_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
