use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use service::errors::ServiceError;
use service::options::OptionsError;
use thiserror::Error;
use tracing::error;

/// Terminal request failures, rendered as `{code, message, data: {status}}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("{0}")]
    InvalidParam(String),
    /// The detail is logged, never sent to the caller.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::InvalidParam(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized(_) => "unauthorized",
            ApiError::InvalidParam(_) => "invalid_param",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(detail) = &self {
            error!(error = %detail, "request failed");
        }
        let body = json!({
            "code": self.code(),
            "message": self.to_string(),
            "data": { "status": status.as_u16() },
        });
        (status, Json(body)).into_response()
    }
}

impl From<OptionsError> for ApiError {
    fn from(e: OptionsError) -> Self {
        ApiError::InvalidParam(e.to_string())
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => ApiError::InvalidParam(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
