use askama::Template;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use service_core::utils::utc_timestamp;

use crate::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub service_name: String,
    pub version: String,
}

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!("Serving index page");
    IndexTemplate {
        service_name: state.config.common.service_name.clone(),
        version: state.config.common.version.clone(),
    }
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    tracing::debug!("Health check requested");
    let common = &state.config.common;

    Json(json!({
        "service": common.service_name,
        "status": "healthy",
        "timestamp": utc_timestamp(),
        "version": common.version
    }))
}
