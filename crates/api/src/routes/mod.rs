pub mod health;
pub mod pages;
pub mod projects;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                       list (filter: category, classification)
/// /projects/{slug}                get one record
/// /categories                     filter labels ("All" first)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", projects::router())
        .route("/categories", get(handlers::projects::list_categories))
}
