//! HTTP error boundary
//!
//! Every handler body runs inside [`guarded`], which logs failures once with
//! the operation name and turns them into the fixed client-facing responses.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::future::Future;

/// Body returned when the addressed country does not exist
pub const INVALID_SUBMISSION: &str = "Submitted data is invalid";

/// Body returned for every unexpected failure
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error. Please try again later";

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(self),
        )
            .into_response()
    }
}

/// Failure raised inside a handler body
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The addressed row does not exist
    #[error("invalid {action} attempt")]
    InvalidAttempt { action: &'static str },

    /// The request body broke a field rule
    #[error("validation failed: {}", .errors.join(", "))]
    Validation { errors: Vec<String> },

    /// Anything unexpected: store, transaction, mapping
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Log this failure for `operation` and build the client response
    pub fn into_operation_response(self, operation: &'static str) -> Response {
        match self {
            Self::InvalidAttempt { action } => {
                tracing::error!(operation, "Invalid {action} attempt in {operation}");
                (StatusCode::BAD_REQUEST, INVALID_SUBMISSION).into_response()
            }
            Self::Validation { errors } => {
                tracing::warn!(operation, ?errors, "Rejected invalid payload in {operation}");
                Problem::new(StatusCode::BAD_REQUEST, "Validation Error")
                    .with_detail(errors.join("; "))
                    .into_response()
            }
            Self::Internal(error) => {
                tracing::error!(operation, error = ?error, "Something went wrong in the {operation}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR).into_response()
            }
        }
    }
}

/// Run a handler body, mapping any [`ApiError`] through the shared boundary
pub async fn guarded<F, R>(operation: &'static str, handler: F) -> Response
where
    F: Future<Output = Result<R, ApiError>>,
    R: IntoResponse,
{
    match handler.await {
        Ok(response) => response.into_response(),
        Err(error) => error.into_operation_response(operation),
    }
}
