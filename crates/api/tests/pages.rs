//! Integration tests for server-rendered pages.

mod common;

use axum::http::{header, StatusCode};
use common::{body_text, get};

// ---------------------------------------------------------------------------
// Test: case study on its own template renders
// ---------------------------------------------------------------------------

#[tokio::test]
async fn case_study_page_renders() {
    let response = get(
        common::build_test_app(),
        "/projects/case-study-default.html?slug=call-recording-app",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"data-theme="dark""#));
    assert!(html.contains(r#"data-state="ready""#));
    assert!(html.contains("section-overview"));
    assert!(html.contains(r#"<span class="highlight">"#));
}

// ---------------------------------------------------------------------------
// Test: compact-schema case study renders on its template
// ---------------------------------------------------------------------------

#[tokio::test]
async fn compact_case_study_page_renders() {
    let response = get(
        common::build_test_app(),
        "/projects/case-study-visual.html?slug=podcast-discovery-study",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("section-competitiveAnalysis"));
    assert!(html.contains("section-outcomes"));
    assert!(!html.contains("section-highFidelity"));
    assert!(!html.contains("section-learnings"));
}

// ---------------------------------------------------------------------------
// Test: showcase page renders gallery with numbered alts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn showcase_page_renders_gallery() {
    let response = get(
        common::build_test_app(),
        "/projects/project-showcase.html?slug=crypto-dashboard",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(r#"alt="Crypto Dashboard design 1""#));
    assert!(html.contains("gallery-item"));
}

// ---------------------------------------------------------------------------
// Test: wrong template redirects to the declared one with the same slug
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mismatched_template_redirects() {
    let response = get(
        common::build_test_app(),
        "/projects/case-study-default.html?slug=crypto-dashboard",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("redirect has a location")
        .to_str()
        .unwrap();
    assert_eq!(location, "/projects/project-showcase.html?slug=crypto-dashboard");
}

#[tokio::test]
async fn unknown_page_name_redirects_known_slug() {
    let response = get(
        common::build_test_app(),
        "/projects/old-layout.html?slug=call-recording-app",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/projects/case-study-default.html?slug=call-recording-app"
    );
}

// ---------------------------------------------------------------------------
// Test: unknown and missing slugs render the not-found page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_slug_renders_not_found_page() {
    let response = get(
        common::build_test_app(),
        "/projects/project-showcase.html?slug=does-not-exist",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_text(response).await;
    assert!(html.contains(r#"data-state="not-found""#));
    assert!(html.contains("Project not found"));
}

#[tokio::test]
async fn missing_slug_renders_not_found_page() {
    let response = get(common::build_test_app(), "/projects/case-study-default.html").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_text(response).await;
    assert!(html.contains("No project slug in URL"));
}

// ---------------------------------------------------------------------------
// Test: home page grid, filters and view-more
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_page_limits_cards_and_offers_more() {
    let response = get(common::build_test_app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert_eq!(html.matches(r#"class="project-card project-item""#).count(), 8);
    assert!(html.contains(r#"href="/?all=true""#));
}

#[tokio::test]
async fn home_page_show_all_lists_every_card() {
    let html = body_text(get(common::build_test_app(), "/?all=true").await).await;
    assert_eq!(html.matches(r#"class="project-card project-item""#).count(), 10);
}

#[tokio::test]
async fn home_page_filters_by_category() {
    let html = body_text(get(common::build_test_app(), "/?category=SaaS").await).await;
    assert_eq!(html.matches(r#"class="project-card project-item""#).count(), 3);
    assert!(html.contains(r#"class="filter active""#));
}
