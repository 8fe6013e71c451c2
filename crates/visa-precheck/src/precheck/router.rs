use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::service::{PrecheckService, PrecheckServiceError};
use super::store::{AnalysisId, AnalysisStore, StoreError};

/// Router builder exposing HTTP endpoints for analysis submission and derived
/// readiness reports.
pub fn precheck_router<S>(service: Arc<PrecheckService<S>>) -> Router
where
    S: AnalysisStore + 'static,
{
    Router::new()
        .route("/api/v1/precheck/analyses", post(submit_handler::<S>))
        .route(
            "/api/v1/precheck/analyses/:analysis_id/report",
            get(report_handler::<S>),
        )
        .route(
            "/api/v1/precheck/report/latest",
            get(latest_report_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub focus: Option<String>,
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<PrecheckService<S>>>,
    axum::Json(payload): axum::Json<serde_json::Value>,
) -> Response
where
    S: AnalysisStore + 'static,
{
    match service.submit(payload) {
        Ok(stored) => {
            let view = stored.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(PrecheckServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(PrecheckServiceError::Store(StoreError::Conflict)) => {
            let payload = json!({
                "error": "analysis already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn report_handler<S>(
    State(service): State<Arc<PrecheckService<S>>>,
    Path(analysis_id): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Response
where
    S: AnalysisStore + 'static,
{
    let id = AnalysisId(analysis_id);
    match service.report(&id, query.focus.as_deref()) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(PrecheckServiceError::Store(StoreError::NotFound)) => {
            let payload = json!({
                "analysis_id": id.0,
                "error": "analysis not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn latest_report_handler<S>(
    State(service): State<Arc<PrecheckService<S>>>,
    Query(query): Query<ReportQuery>,
) -> Response
where
    S: AnalysisStore + 'static,
{
    match service.latest_report(query.focus.as_deref()) {
        Ok(Some(view)) => (StatusCode::OK, axum::Json(view)).into_response(),
        Ok(None) => {
            let payload = json!({
                "error": "no analysis submitted yet",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
