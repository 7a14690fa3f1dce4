//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; the request ID flows through handler
//!   log events.
//! - Metrics are cheap atomic updates exposed on a separate Prometheus
//!   scrape endpoint.

pub mod logging;
pub mod metrics;
