//! Input descriptor resolution.
//!
//! # Responsibilities
//! - Fetch image bytes over HTTP with a bounded timeout
//! - Reinterpret data-URI-like descriptors as bytes
//! - Reject anything else
//!
//! Descriptor rules are checked in order: an `http` prefix means a URL fetch;
//! otherwise a comma means a data-URI-like string; otherwise the descriptor is
//! invalid.

use std::time::Duration;

use axum::http::StatusCode;

use crate::error::{GatewayError, GatewayResult};

/// Resolves a raw input descriptor into bytes, one call per request.
#[derive(Clone)]
pub struct InputResolver {
    client: reqwest::Client,
    fetch_timeout: Duration,
}

impl InputResolver {
    pub fn new(client: reqwest::Client, fetch_timeout: Duration) -> Self {
        Self {
            client,
            fetch_timeout,
        }
    }

    /// Resolve a descriptor to raw bytes.
    pub async fn resolve(&self, descriptor: &str) -> GatewayResult<Vec<u8>> {
        if descriptor.starts_with("http") {
            self.fetch(descriptor).await
        } else if let Some((_, remainder)) = descriptor.split_once(',') {
            // Data-URI-like descriptor. The text after the first comma is
            // returned as its UTF-8 bytes verbatim; it is NOT base64-decoded.
            // This reproduces the upstream service's behavior (see DESIGN.md).
            Ok(remainder.as_bytes().to_vec())
        } else {
            Err(GatewayError::InvalidInputDescriptor)
        }
    }

    async fn fetch(&self, url: &str) -> GatewayResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .timeout(self.fetch_timeout)
            .send()
            .await
            .map_err(|e| GatewayError::ImageDownload {
                url: url.to_owned(),
                status: None,
                detail: e.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::ImageDownload {
                url: url.to_owned(),
                status: Some(status.as_u16()),
                detail: body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::ImageDownload {
                url: url.to_owned(),
                status: Some(status.as_u16()),
                detail: e.to_string(),
            })?;

        Ok(bytes.to_vec())
    }
}
