//! Error responses for the essay endpoints.
//!
//! Every failure a handler can hit is an [`ApiError`]. Converting it into a response
//! picks the status code and produces a JSON body of the form:
//!
//! ```json
//! { "error": "No essay provided" }
//! ```
//!
//! Server-side failures also carry a machine-readable `kind`, so a client can tell an
//! unavailable model apart from a storage fault:
//!
//! ```json
//! { "error": "feedback service rate limit reached: ...", "kind": "upstream_rate_limited" }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use grader::error::GraderError;
use sea_orm::DbErr;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required field is missing or the body could not be read.
    #[error("{0}")]
    BadRequest(String),
    /// The referenced essay does not exist.
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Grader(#[from] GraderError),
    #[error("database error: {0}")]
    Storage(#[from] DbErr),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Grader(GraderError::UpstreamUnavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Grader(GraderError::RateLimited(_)) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Grader(GraderError::Authentication(_))
            | ApiError::Grader(GraderError::MalformedResponse(_)) => StatusCode::BAD_GATEWAY,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> Option<&'static str> {
        match self {
            ApiError::BadRequest(_) | ApiError::NotFound(_) => None,
            ApiError::Grader(GraderError::UpstreamUnavailable(_)) => Some("upstream_unavailable"),
            ApiError::Grader(GraderError::RateLimited(_)) => Some("upstream_rate_limited"),
            ApiError::Grader(GraderError::Authentication(_)) => Some("upstream_authentication"),
            ApiError::Grader(GraderError::MalformedResponse(_)) => {
                Some("upstream_malformed_response")
            }
            ApiError::Storage(_) => Some("storage"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Storage details stay in the log, not in the response.
        let message = match &self {
            ApiError::Storage(e) => {
                tracing::error!(error = %e, "Database operation failed");
                "Database error".to_string()
            }
            ApiError::Grader(e) => {
                tracing::error!(error = %e, "Feedback generation failed");
                e.to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            error: message,
            kind: self.kind(),
        };

        (status, Json(body)).into_response()
    }
}
