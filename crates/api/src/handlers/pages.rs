//! Handlers for server-rendered pages.
//!
//! The server plays the part of the browser: it turns the request path and
//! query into a [`PageLocation`], hands an empty host document to the
//! renderer and serialises whatever the renderer produced.

use axum::extract::{Path, Query, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use folio_core::document::Document;
use folio_core::renderer::{render_page, RenderOutcome};
use folio_core::selected_work::{render_home, CategoryFilter};
use folio_core::template::{detect_current_template, PageLocation, TemplateName};
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Directory detail pages are served from.
pub const PROJECTS_DIR: &str = "/projects";

/// Query parameters for the home page.
#[derive(Debug, Default, Deserialize)]
pub struct HomeParams {
    /// Active category filter; absent or `All` shows everything.
    pub category: Option<String>,
    /// Lift the card limit.
    #[serde(default)]
    pub all: bool,
}

/// GET /
///
/// The Selected Work grid for the requested filter state.
pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<HomeParams>,
) -> Html<String> {
    let filter = CategoryFilter::parse(params.category.as_deref());
    Html(render_home(&state.content, filter, params.all))
}

/// GET /projects/{page}
///
/// Render a project detail page. Responds 200 with the page, 303 to the
/// project's own template page, or 404 with the not-found page.
pub async fn project_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
    RawQuery(query): RawQuery,
) -> AppResult<Response> {
    let location = PageLocation::new(format!("{PROJECTS_DIR}/{page}"), query);

    // Unknown page names still get a host so missing slugs can render 404.
    let template = detect_current_template(&location).unwrap_or(TemplateName::ProjectShowcase);
    let mut doc = Document::host(template);

    let response = match render_page(&state.content, &location, &mut doc)? {
        RenderOutcome::Rendered { .. } => Html(doc.to_html()).into_response(),
        RenderOutcome::Redirect(to) => {
            Redirect::to(&format!("{PROJECTS_DIR}/{}", to.href())).into_response()
        }
        RenderOutcome::NotFound(_) => (StatusCode::NOT_FOUND, Html(doc.to_html())).into_response(),
    };
    Ok(response)
}
