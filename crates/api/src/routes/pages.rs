//! Route definitions for server-rendered pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page routes mounted at the root.
///
/// ```text
/// GET    /                  -> home (Selected Work grid)
/// GET    /projects/{page}   -> project_page (e.g. case-study-default.html?slug=x)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/projects/{page}", get(pages::project_page))
}
