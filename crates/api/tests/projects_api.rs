//! Integration tests for the project content API.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use folio_core::content::ContentRepository;

// ---------------------------------------------------------------------------
// Test: list returns every project in table order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_projects_returns_all_in_table_order() {
    let response = get(common::build_test_app(), "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().expect("data array");
    assert_eq!(data.len(), 10);
    assert_eq!(data[0]["slug"], "call-recording-app");
    assert_eq!(data[0]["classification"], "case-study");
    assert_eq!(
        data[0]["href"],
        "projects/case-study-default.html?slug=call-recording-app"
    );
    assert!(data[0]["shortDescription"].is_string());
}

// ---------------------------------------------------------------------------
// Test: category and classification filters combine
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_projects_filters_by_category_and_classification() {
    let response = get(
        common::build_test_app(),
        "/api/v1/projects?category=Mobile&classification=case-study",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let slugs: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(
        slugs,
        ["call-recording-app", "fitness-tracking-app", "podcast-discovery-study"]
    );
}

// ---------------------------------------------------------------------------
// Test: percent-encoded category matches
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_projects_decodes_category() {
    let response = get(common::build_test_app(), "/api/v1/projects?category=Landing%20Pages").await;
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert!(!data.is_empty());
    assert!(data.iter().all(|p| p["category"] == "Landing Pages"));
}

// ---------------------------------------------------------------------------
// Test: unknown classification is a 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_projects_rejects_unknown_classification() {
    let response = get(common::build_test_app(), "/api/v1/projects?classification=blog").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Test: get by slug returns the full record
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_project_returns_full_record() {
    let response = get(common::build_test_app(), "/api/v1/projects/podcast-discovery-study").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["template"], "case-study-visual");
    assert_eq!(data["sections"]["highFidelity"], true);
    assert_eq!(data["sectionContent"]["competitiveAnalysis"]["layout"], "grid-3");
}

#[tokio::test]
async fn get_project_goals_carry_shape_discriminant() {
    let response = get(common::build_test_app(), "/api/v1/projects/call-recording-app").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["sectionContent"]["goals"]["shape"], "categorized");
    assert_eq!(json["data"]["sectionContent"]["strategy"]["shape"], "numbered");
}

// ---------------------------------------------------------------------------
// Test: unknown slug is a JSON 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_project_unknown_slug_returns_404() {
    let response = get(common::build_test_app(), "/api/v1/projects/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project 'does-not-exist' not found");
}

// ---------------------------------------------------------------------------
// Test: categories list "All" first
// ---------------------------------------------------------------------------

#[tokio::test]
async fn categories_start_with_all() {
    let response = get(common::build_test_app(), "/api/v1/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        serde_json::json!(["All", "Mobile", "Landing Pages", "SaaS"])
    );
}

// ---------------------------------------------------------------------------
// Test: a substituted content table is served instead of the embedded one
// ---------------------------------------------------------------------------

#[tokio::test]
async fn serves_injected_content_table() {
    let content = ContentRepository::from_json(
        r#"[{
            "id": 7, "slug": "only-one", "title": "Only One", "category": "Print",
            "shortDescription": "s", "classification": "showcase",
            "template": "project-showcase", "heroImage": "Assets/one.png",
            "seoMeta": { "title": "t", "description": "d" }
        }]"#,
    )
    .expect("valid fixture");

    let app = common::build_test_app_with(content);
    let json = body_json(get(app, "/api/v1/projects").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], 7);
}
