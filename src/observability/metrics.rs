//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): predict requests by pipeline, status
//! - `gateway_request_duration_seconds` (histogram): predict latency by
//!   pipeline, status

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
///
/// Failure to install is logged, not fatal; the gateway serves traffic either
/// way.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install Prometheus exporter"),
    }
}

/// Record one predict request outcome.
pub fn record_predict(pipeline: &str, status: u16, start_time: Instant) {
    let labels = [
        ("pipeline", pipeline.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("gateway_requests_total", &labels).increment(1);
    metrics::histogram!("gateway_request_duration_seconds", &labels)
        .record(start_time.elapsed().as_secs_f64());
}
