//! Handlers for the project content API.
//!
//! Read-only views over the content table: filtered summaries, full records
//! and the category filter labels.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::content::{Classification, ProjectRecord};
use folio_core::selected_work::{project_href, FILTER_ALL};
use folio_core::template::TemplateName;
use folio_core::types::ProjectId;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /api/v1/projects`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    /// Exact category match.
    pub category: Option<String>,
    /// `case-study` or `showcase`.
    pub classification: Option<String>,
}

/// Card-level view of a project record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub slug: String,
    pub title: String,
    pub category: String,
    pub short_description: String,
    pub classification: Classification,
    pub template: TemplateName,
    pub hero_image: String,
    /// Detail page link relative to the site root.
    pub href: String,
}

impl From<&ProjectRecord> for ProjectSummary {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            id: record.id,
            slug: record.slug.clone(),
            title: record.title.clone(),
            category: record.category.clone(),
            short_description: record.short_description.clone(),
            classification: record.classification,
            template: record.template,
            hero_image: record.hero_image.clone(),
            href: project_href(record),
        }
    }
}

/// GET /api/v1/projects
///
/// List project summaries in table order, optionally filtered by category
/// and classification.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<impl IntoResponse> {
    let classification = params
        .classification
        .as_deref()
        .map(Classification::from_str_value)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let records: Vec<&ProjectRecord> = match params.category.as_deref() {
        Some(category) => state.content.in_category(category),
        None => state.content.all().iter().collect(),
    };

    let items: Vec<ProjectSummary> = records
        .into_iter()
        .filter(|r| classification.map_or(true, |k| r.classification == k))
        .map(ProjectSummary::from)
        .collect();

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/projects/{slug}
///
/// The full record, including section content.
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = state.content.get_by_slug(&slug)?;
    Ok(Json(DataResponse {
        data: record.clone(),
    }))
}

/// GET /api/v1/categories
///
/// Filter labels for the Selected Work grid: "All" then each category in
/// first-appearance order.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let labels: Vec<String> = std::iter::once(FILTER_ALL)
        .chain(state.content.categories())
        .map(str::to_string)
        .collect();
    Ok(Json(DataResponse { data: labels }))
}
