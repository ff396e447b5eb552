use std::sync::Arc;

use folio_core::content::ContentRepository;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The validated content table, loaded once at startup.
    pub content: Arc<ContentRepository>,
}
