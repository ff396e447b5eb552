#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use folio_core::content::ContentRepository;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        content_path: None,
        log_json: false,
    }
}

/// The site's embedded content table.
pub fn embedded_content() -> ContentRepository {
    ContentRepository::embedded().expect("embedded content is valid")
}

/// Build the full application router with all middleware layers over the
/// given content table.
pub fn build_test_app_with(content: ContentRepository) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        content: Arc::new(content),
    };
    build_app_router(state, &config)
}

/// Build the full application router over the embedded content table.
pub fn build_test_app() -> Router {
    build_test_app_with(embedded_content())
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect the body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect the body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
