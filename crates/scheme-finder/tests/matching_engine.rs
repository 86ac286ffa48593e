//! End-to-end coverage for the matching engine and its HTTP surface, driven
//! through the crate's public API only.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use scheme_finder::catalog::SchemeCatalog;
use scheme_finder::matching::{match_router, MatchEngine, ProfileForm, SeekerProfile};

#[test]
fn standard_catalog_has_unique_ids_and_data() {
    let catalog = SchemeCatalog::standard();

    assert!(!catalog.is_empty());
    let mut ids: Vec<&str> = catalog.iter().map(|scheme| scheme.id.0.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), catalog.len());
    assert!(catalog.iter().all(|scheme| !scheme.tags.is_empty()));
}

#[test]
fn default_profile_sees_every_unconstrained_scheme() {
    let catalog = SchemeCatalog::standard();
    let engine = MatchEngine::default();

    let report = engine.rank(&SeekerProfile::default(), &catalog);

    assert_eq!(report.total_count, catalog.len());
    assert_eq!(report.eligible_count, report.results.len());
    // A blank profile can never outscore a filled one on constraint axes.
    assert!(report.results.iter().all(|result| result.score == 0));
}

#[test]
fn young_sc_student_ranks_scholarships_first() {
    let catalog = SchemeCatalog::standard();
    let engine = MatchEngine::default();

    let form = ProfileForm {
        age: "19".to_string(),
        caste: Some(scheme_finder::catalog::CasteCategory::Sc),
        income: "150000".to_string(),
        education: Some(scheme_finder::catalog::EducationLevel::TwelfthPass),
        occupation: Some(scheme_finder::catalog::Occupation::Student),
        ..ProfileForm::default()
    };
    let report = engine.rank(&form.normalize(), &catalog);

    assert!(!report.results.is_empty());
    assert_eq!(report.results[0].scheme.id.0, "nsp-post-matric-sc");
    assert!(report.results[0].eligible);
    // 15 (age) + 12 (caste) + 14 (income) + 12 (education) + 10 (occupation)
    assert_eq!(report.results[0].score, 63);
}

#[tokio::test]
async fn match_endpoint_returns_ranked_results() {
    let app = match_router(
        Arc::new(SchemeCatalog::standard()),
        Arc::new(MatchEngine::default()),
    );

    let payload = json!({
        "age": "20",
        "gender": "female",
        "income": "100000",
        "search": "women",
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/schemes/match")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let body: Value = serde_json::from_slice(&bytes).expect("valid JSON");

    let results = body["results"].as_array().expect("results array");
    assert!(!results.is_empty());
    assert_eq!(body["total_count"].as_u64(), Some(10));
    assert!(body["eligible_count"].as_u64().expect("count") >= 1);
    for result in results {
        assert_eq!(result["eligible"], Value::Bool(true));
        assert!(result["match_percent"].as_u64().expect("percent") <= 100);
    }
    // Best match first.
    let scores: Vec<u64> = results
        .iter()
        .map(|result| result["score"].as_u64().expect("score"))
        .collect();
    let mut sorted = scores.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);
}

#[tokio::test]
async fn match_endpoint_tolerates_malformed_numeric_text() {
    let app = match_router(
        Arc::new(SchemeCatalog::standard()),
        Arc::new(MatchEngine::default()),
    );

    let payload = json!({ "age": "not-a-number", "income": "" });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/schemes/match")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let body: Value = serde_json::from_slice(&bytes).expect("valid JSON");
    // Malformed age never excludes, so the report matches the blank profile.
    assert_eq!(
        body["results"].as_array().expect("results").len(),
        body["eligible_count"].as_u64().expect("count") as usize
    );
}

#[tokio::test]
async fn scheme_listing_and_detail_endpoints() {
    let app = match_router(
        Arc::new(SchemeCatalog::standard()),
        Arc::new(MatchEngine::default()),
    );

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/schemes")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let body: Value = serde_json::from_slice(&bytes).expect("valid JSON");
    assert_eq!(body["total"].as_u64(), Some(10));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/schemes/unknown-id")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
