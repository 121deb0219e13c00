use axum::{extract::State, Extension, Json};
use serde_json::Value;
use service_core::error::AppError;
use service_core::middleware::RequestId;

use crate::AppState;

/// Proxies the backend item list. Any failure reaching or reading the backend
/// is reported as 503.
#[tracing::instrument(skip_all)]
pub async fn get_data(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
) -> Result<Json<Value>, AppError> {
    let client = &state.backend_client;
    tracing::info!("Fetching data from backend: {}", client.base_url());

    let request_id = request_id.as_ref().map(|Extension(id)| id.as_str());
    let data = client.list_items(request_id).await.map_err(|e| {
        tracing::error!("Error communicating with backend: {}", e);
        AppError::UpstreamUnavailable {
            upstream: "Backend",
            message: e.to_string(),
        }
    })?;

    let count = data
        .get("items")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    tracing::info!("Successfully fetched {} items", count);

    Ok(Json(data))
}
