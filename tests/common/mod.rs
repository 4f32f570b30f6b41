//! Shared helpers for integration tests.

#![allow(dead_code)]

use axum_test::TestServer;
use excelsior::config::{ServerConfig, SiteConfig};
use excelsior::contact::MemorySink;
use excelsior::web::create_router;
use excelsior::web::handlers::AppState;
use std::sync::Arc;

/// Create a test server configuration.
pub fn create_test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// Create a test server whose submissions land in a memory sink.
pub fn create_test_server_with(config: &ServerConfig) -> (TestServer, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let app_state = AppState::new(&SiteConfig::default())
        .expect("Failed to build app state")
        .with_sink(sink.clone());

    let router = create_router(Arc::new(app_state), config);
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, sink)
}

/// Create a test server with the default configuration.
pub fn create_test_server() -> (TestServer, Arc<MemorySink>) {
    create_test_server_with(&create_test_config())
}
