use crate::error::{AppError, ErrorResponse};
use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::any::Any;

/// Router fallback: JSON 404 for anything no route matched.
pub async fn not_found_fallback(uri: Uri) -> AppError {
    tracing::warn!("404 error: {}", uri);
    AppError::RouteNotFound
}

/// Panic handler for `CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("500 error: {}", detail);

    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
}
