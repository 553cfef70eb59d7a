//! HTTP error surface.
//!
//! # Responsibility
//! - Translate the service failure taxonomy into status codes and
//!   response bodies.
//!
//! # Invariants
//! - Validation responses enumerate every violated field rule.
//! - Storage failures are logged with detail but answered generically;
//!   they are never retried or translated into a domain code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde_json::json;

use bikeshop_core::{FieldError, ServiceError};

/// Request failure, ready to render as an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// 404, no body detail.
    NotFound,
    /// 400 with the full list of field violations.
    Validation(Vec<FieldError>),
    /// 500 with a generic body; detail goes to the log only.
    Internal,
}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::NotFound(_) => Self::NotFound,
            ServiceError::Validation(errors) => Self::Validation(errors),
            ServiceError::Storage(err) => {
                error!("event=storage_failure module=server error={err}");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "storage failure" })),
            )
                .into_response(),
        }
    }
}
