//! Router configuration.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::handlers::{index, not_found, submit_contact, AppState};
use super::middleware::{create_cors_layer, security_headers};
use super::openapi::openapi_json;
use crate::config::ServerConfig;

/// Create the main site router: landing page, API, health check and OpenAPI
/// document. Every route sits behind the same layer stack.
pub fn create_router(app_state: Arc<AppState>, config: &ServerConfig) -> Router {
    let api_routes = Router::new().route("/contact", post(submit_contact));

    Router::new()
        .route("/", get(index))
        .nest("/api", api_routes)
        .with_state(app_state)
        .merge(create_health_router())
        .merge(create_openapi_router())
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.request_timeout_secs,
                )))
                .layer(create_cors_layer(&config.cors_origins))
                .layer(middleware::from_fn(security_headers)),
        )
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Create the OpenAPI document router.
pub fn create_openapi_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
