//! Route definitions for the project content API.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Project routes mounted at `/api/v1/projects`.
///
/// ```text
/// GET    /                  -> list_projects
/// GET    /{slug}            -> get_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_projects))
        .route("/{slug}", get(projects::get_project))
}
