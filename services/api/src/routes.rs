use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use visa_precheck::error::AppError;
use visa_precheck::precheck::{
    derive_report, AnalysisIntake, AnalysisStore, PrecheckReportView, PrecheckService,
    precheck_router,
};

/// One-shot derivation request: the raw analysis service response plus an
/// optional checklist focus key. Nothing is stored.
#[derive(Debug, Deserialize)]
pub(crate) struct PrecheckReportRequest {
    pub(crate) analysis: serde_json::Value,
    #[serde(default)]
    pub(crate) focus: Option<String>,
}

pub(crate) fn with_precheck_routes<S>(service: Arc<PrecheckService<S>>) -> axum::Router
where
    S: AnalysisStore + 'static,
{
    precheck_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/precheck/report",
            axum::routing::post(precheck_report_endpoint),
        )
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

pub(crate) async fn precheck_report_endpoint(
    Json(payload): Json<PrecheckReportRequest>,
) -> Result<Json<PrecheckReportView>, AppError> {
    let PrecheckReportRequest { analysis, focus } = payload;

    let report = AnalysisIntake::from_value(analysis)?;
    Ok(Json(derive_report(&report, focus.as_deref())))
}
