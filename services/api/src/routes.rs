use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use ghostjob::error::AppError;
use ghostjob::scoring::{GhostJobAssessment, RawSignals, ScoringEngine};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

/// Posting fragments captured by the page extractor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EvaluatePostingRequest {
    #[serde(flatten)]
    pub(crate) signals: RawSignals,
    /// Raw header text scanned for the "Reposted" marker.
    #[serde(default)]
    pub(crate) header_fragments: Vec<String>,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/postings/evaluate", post(evaluate_posting_endpoint))
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn evaluate_posting_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<EvaluatePostingRequest>, JsonRejection>,
) -> Result<Json<GhostJobAssessment>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Input(rejection.body_text()))?;
    let EvaluatePostingRequest {
        mut signals,
        header_fragments,
    } = request;

    signals.merge_repost_marker(header_fragments.iter().map(String::as_str));

    let assessment = ScoringEngine::new(state.scoring.jitter()).evaluate(&signals);
    info!(
        score = assessment.score,
        bucket = assessment.label.as_str(),
        "evaluated job posting"
    );

    Ok(Json(assessment))
}
