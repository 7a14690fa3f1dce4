//! Request types and request-ID middleware.
//!
//! # Responsibilities
//! - Define the inbound predict request shape
//! - Stamp a unique request ID on every request for tracing
//!
//! # Design Decisions
//! - Request ID is added as early as possible and preserved if the client
//!   already sent one.

use std::task::{Context, Poll};

use axum::http::{HeaderValue, Request};
use serde::Deserialize;
use tower::{Layer, Service};
use uuid::Uuid;

use crate::pipeline::Parameters;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Inbound body of `POST /predict`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    /// Pipeline identifier selecting the codec.
    pub hf_pipeline: String,

    /// Model deployment endpoint the envelope is POSTed to.
    pub model_deployed_url: String,

    /// Raw input: text, a URL, or a data-URI-like string depending on pipeline.
    pub inputs: String,

    /// Free-form pipeline parameters.
    #[serde(default)]
    pub parameters: Parameters,
}

/// Layer that assigns a UUID v4 request ID when none is present.
#[derive(Debug, Clone, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

#[derive(Debug, Clone)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequestIdService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        if !request.headers().contains_key(X_REQUEST_ID) {
            if let Ok(value) = HeaderValue::from_str(&Uuid::new_v4().to_string()) {
                request.headers_mut().insert(X_REQUEST_ID, value);
            }
        }
        self.inner.call(request)
    }
}
