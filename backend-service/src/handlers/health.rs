use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use service_core::utils::utc_timestamp;

use crate::startup::AppState;

/// Service description and the endpoints it knows about.
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!("Root endpoint accessed");
    let common = &state.config.common;

    Json(json!({
        "service": common.service_name,
        "version": common.version,
        "status": "running",
        "endpoints": {
            "health": "/health",
            "items": "/api/items",
            "item": "/api/items/<id>"
        }
    }))
}

/// Liveness check. The database field is a fixed placeholder.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    tracing::debug!("Health check requested");
    let common = &state.config.common;

    Json(json!({
        "service": common.service_name,
        "status": "healthy",
        "timestamp": utc_timestamp(),
        "version": common.version,
        "database": "connected"
    }))
}

pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "service": state.config.common.service_name,
        "ready": true,
        "timestamp": utc_timestamp()
    }))
}

/// JSON metrics summary; Prometheus output lives on `/metrics`.
pub async fn service_metrics(State(state): State<AppState>) -> impl IntoResponse {
    let common = &state.config.common;

    Json(json!({
        "service": common.service_name,
        "version": common.version,
        "items_count": state.store.len().await,
        "uptime": "N/A",
        "requests_total": "N/A",
        "timestamp": utc_timestamp()
    }))
}
