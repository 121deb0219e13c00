use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "The requested resource was not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("Route not found")]
    RouteNotFound,

    #[error("Failed to {operation}: {message}")]
    OperationFailed { operation: &'static str, message: String },

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("{upstream} service unavailable: {message}")]
    UpstreamUnavailable {
        upstream: &'static str,
        message: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl AppError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        AppError::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn operation_failed(operation: &'static str, err: impl std::fmt::Display) -> Self {
        AppError::OperationFailed {
            operation,
            message: err.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::UpstreamUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::OperationFailed { .. }
            | AppError::InternalError(_)
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// JSON body shared by every error response: `{error, message?, id?}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ErrorResponse {
    pub fn not_found() -> Self {
        Self {
            error: "Not Found".to_string(),
            message: Some(NOT_FOUND_MESSAGE.to_string()),
            id: None,
        }
    }

    pub fn internal() -> Self {
        Self {
            error: "Internal Server Error".to_string(),
            message: Some(INTERNAL_ERROR_MESSAGE.to_string()),
            id: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::BadRequest(msg) => ErrorResponse {
                error: msg,
                message: None,
                id: None,
            },
            AppError::NotFound { resource, id } => ErrorResponse {
                error: format!("{} not found", resource),
                message: None,
                id: Some(id),
            },
            AppError::RouteNotFound => ErrorResponse::not_found(),
            AppError::OperationFailed { operation, message } => ErrorResponse {
                error: format!("Failed to {}", operation),
                message: Some(message),
                id: None,
            },
            AppError::InternalError(err) => {
                tracing::error!(error = %format!("{:#}", err), "Unhandled internal error");
                ErrorResponse::internal()
            }
            AppError::UpstreamUnavailable { upstream, message } => ErrorResponse {
                error: format!("{} service unavailable", upstream),
                message: Some(message),
                id: None,
            },
            AppError::ConfigError(err) => ErrorResponse {
                error: "Configuration error".to_string(),
                message: Some(err.to_string()),
                id: None,
            },
        };

        (status, Json(body)).into_response()
    }
}
