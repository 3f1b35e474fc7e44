//! System endpoints: health check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: String,
    /// Current server time, RFC 3339.
    pub timestamp: String,
    /// Crate version.
    pub version: String,
    /// Backend serving locations (`postgres` or `memory`).
    pub store: String,
}

/// `GET /health`: Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health, version, current timestamp, and whether the location store answers.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.location_service.store();
    let (status, code) = match store.ping().await {
        Ok(()) => ("healthy", StatusCode::OK),
        Err(err) => {
            tracing::warn!(error = %err, "health check failed");
            ("degraded", StatusCode::SERVICE_UNAVAILABLE)
        }
    };
    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store: store.backend().to_string(),
        }),
    )
}

/// System routes mounted at the root level (not under /api).
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
