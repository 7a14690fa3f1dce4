//! Stateless predict call to the model deployment endpoint.
//!
//! # Responsibilities
//! - POST the serialized V2 envelope to the caller-supplied URL
//! - Enforce a bounded per-call timeout
//! - Map non-200 statuses and transport failures to gateway errors
//!
//! No retries: a downstream failure is reported once and immediately.

use std::time::Duration;

use axum::http::StatusCode;

use crate::error::{GatewayError, GatewayResult};
use crate::protocol::{V2Envelope, V2Response};

/// One-shot client for the downstream predict call.
#[derive(Clone)]
pub struct DownstreamClient {
    client: reqwest::Client,
    call_timeout: Duration,
}

impl DownstreamClient {
    pub fn new(client: reqwest::Client, call_timeout: Duration) -> Self {
        Self {
            client,
            call_timeout,
        }
    }

    /// POST the envelope and parse the V2 response.
    pub async fn predict(&self, url: &str, envelope: &V2Envelope) -> GatewayResult<V2Response> {
        let response = self
            .client
            .post(url)
            .timeout(self.call_timeout)
            .json(envelope)
            .send()
            .await
            .map_err(GatewayError::DownstreamTransport)?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = %status, url = %url, "Downstream endpoint returned error status");
            return Err(GatewayError::DownstreamStatus(status.as_u16()));
        }

        response
            .json::<V2Response>()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))
    }
}
