use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use service_core::utils::utc_timestamp;

use crate::AppState;

pub async fn service_metrics(State(state): State<AppState>) -> impl IntoResponse {
    let common = &state.config.common;

    Json(json!({
        "service": common.service_name,
        "version": common.version,
        "uptime": "N/A",
        "requests_total": "N/A",
        "timestamp": utc_timestamp()
    }))
}
