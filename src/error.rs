//! Gateway error taxonomy and HTTP mapping.
//!
//! # Design Decisions
//! - Every recognized failure is reported to the caller as `{"error": <message>}`;
//!   no error is fatal to the process and no request is retried.
//! - Caller mistakes map to 400, downstream/fetch failures to 502. The upstream
//!   Python service returned every error with an implicit 200; see DESIGN.md for
//!   the documented deviation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur while handling a predict request.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The `hf_pipeline` value is not one of the four supported pipelines.
    #[error("Unsupported pipeline type")]
    UnsupportedPipeline(String),

    /// Fetching a binary input by URL failed (non-200 status or transport error).
    #[error("Failed to download image from URL {url}: {detail}")]
    ImageDownload {
        url: String,
        status: Option<u16>,
        detail: String,
    },

    /// The input descriptor is neither an HTTP(S) URL nor a data-URI-like string.
    #[error("Invalid image URL")]
    InvalidInputDescriptor,

    /// The model deployment endpoint returned a non-200 status.
    #[error("Received error response from model deployment endpoint")]
    DownstreamStatus(u16),

    /// The model deployment endpoint could not be reached.
    #[error("Failed to reach model deployment endpoint: {0}")]
    DownstreamTransport(#[source] reqwest::Error),

    /// The downstream response body did not have the expected V2 shape.
    #[error("Malformed response from model deployment endpoint: {0}")]
    MalformedResponse(String),

    /// Invariant violation inside the gateway itself.
    #[error("Internal gateway error: {0}")]
    Internal(&'static str),
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// HTTP status the error is surfaced with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::UnsupportedPipeline(_) | GatewayError::InvalidInputDescriptor => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::ImageDownload { .. }
            | GatewayError::DownstreamStatus(_)
            | GatewayError::DownstreamTransport(_)
            | GatewayError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
