//! Service metadata endpoints mounted at the root (not under `/api/v1`).

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"healthy"` or `"degraded"` when the database is unreachable.
    pub status: &'static str,
    pub app_name: String,
    pub version: String,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /health -- returns service and database health.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = flowpilot_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status,
        app_name: state.config.app_name.clone(),
        version: state.config.app_version.clone(),
        db_healthy,
    })
}

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
    pub health: &'static str,
}

/// GET / -- welcome banner.
pub async fn root(State(state): State<AppState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!("Welcome to {} API", state.config.app_name),
        version: state.config.app_version.clone(),
        health: "/health",
    })
}
