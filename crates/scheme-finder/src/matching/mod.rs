//! Profile normalization, eligibility evaluation, and ranking, plus the HTTP
//! surface for the matching endpoints.

pub mod evaluation;
pub mod profile;

#[cfg(test)]
mod tests;

pub use evaluation::{
    MatchAxis, MatchEngine, MatchReport, MatchResult, MatchWeights, ScoreComponent,
};
pub use profile::{ProfileForm, SeekerProfile};

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;

use crate::catalog::{Benefit, Scheme, SchemeCatalog, SchemeId, SchemeType};

/// Shared state behind the matching routes: the read-only catalog and the
/// stateless engine.
#[derive(Clone)]
pub struct MatchState {
    pub catalog: Arc<SchemeCatalog>,
    pub engine: Arc<MatchEngine>,
}

/// Router builder exposing the catalog listing and match endpoints.
pub fn match_router(catalog: Arc<SchemeCatalog>, engine: Arc<MatchEngine>) -> Router {
    let state = MatchState { catalog, engine };
    Router::new()
        .route("/api/v1/schemes", get(list_handler))
        .route("/api/v1/schemes/:scheme_id", get(detail_handler))
        .route("/api/v1/schemes/match", post(match_handler))
        .with_state(state)
}

/// Owned, serialization-ready projection of one ranked result. The
/// `match_percent` clamp is display sugar; the raw score stays unbounded.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResultView {
    pub scheme_id: String,
    pub name: String,
    pub ministry: String,
    pub scheme_type: SchemeType,
    pub benefit: Benefit,
    pub website: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub score: u32,
    pub match_percent: u32,
    pub eligible: bool,
    pub components: Vec<ScoreComponent>,
}

impl MatchResultView {
    fn from_result(result: &MatchResult<'_>) -> Self {
        let scheme = result.scheme;
        Self {
            scheme_id: scheme.id.0.clone(),
            name: scheme.name.clone(),
            ministry: scheme.ministry.clone(),
            scheme_type: scheme.scheme_type,
            benefit: scheme.benefit,
            website: scheme.website.clone(),
            deadline: scheme.deadline,
            tags: scheme.tags.clone(),
            score: result.score,
            match_percent: result.score.min(100),
            eligible: result.eligible,
            components: result.components.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReportView {
    pub results: Vec<MatchResultView>,
    pub eligible_count: usize,
    pub total_count: usize,
}

impl MatchReportView {
    pub fn from_report(report: &MatchReport<'_>) -> Self {
        Self {
            results: report
                .results
                .iter()
                .map(MatchResultView::from_result)
                .collect(),
            eligible_count: report.eligible_count,
            total_count: report.total_count,
        }
    }
}

async fn match_handler(
    State(state): State<MatchState>,
    axum::Json(form): axum::Json<ProfileForm>,
) -> Response {
    let profile = form.normalize();
    let report = state.engine.rank(&profile, &state.catalog);
    (
        StatusCode::OK,
        axum::Json(MatchReportView::from_report(&report)),
    )
        .into_response()
}

async fn list_handler(State(state): State<MatchState>) -> Response {
    let payload = json!({
        "total": state.catalog.len(),
        "schemes": state.catalog.schemes(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

async fn detail_handler(
    State(state): State<MatchState>,
    Path(scheme_id): Path<String>,
) -> Response {
    match state.catalog.get(&SchemeId(scheme_id.clone())) {
        Some(scheme) => scheme_response(scheme),
        None => {
            let payload = json!({ "error": format!("no scheme with id '{scheme_id}'") });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

fn scheme_response(scheme: &Scheme) -> Response {
    (StatusCode::OK, axum::Json(scheme)).into_response()
}
