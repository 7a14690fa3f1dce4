//! Inference Protocol Gateway Library
//!
//! Translates pipeline-oriented predict requests into the V2 tensor wire
//! protocol, forwards them to a caller-supplied model-serving endpoint, and
//! translates the response back into a pipeline-specific output shape.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────────┐
//!                      │                     GATEWAY                      │
//!                      │                                                  │
//!   POST /predict      │  ┌─────────┐   ┌──────────┐   ┌───────────────┐ │
//!   ──────────────────▶│  │  http   │──▶│ pipeline │──▶│   protocol    │ │
//!                      │  │ server  │   │ registry │   │  V2 envelope  │ │
//!                      │  └─────────┘   └────┬─────┘   └───────┬───────┘ │
//!                      │                     │                 │         │
//!                      │               ┌─────▼─────┐    ┌──────▼──────┐  │
//!                      │               │   input   │    │ downstream  │──┼──▶ Model
//!   TaskOutput         │               │ resolver  │    │   client    │◀─┼─── Endpoint
//!   ◀──────────────────┼───────────────┴───────────┴────┴─────────────┘  │
//!                      │                                                  │
//!                      │  ┌────────────────────────────────────────────┐  │
//!                      │  │     config  │  observability  │  errors    │  │
//!                      │  └────────────────────────────────────────────┘  │
//!                      └──────────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod pipeline;
pub mod protocol;

// Outbound collaborators
pub mod downstream;
pub mod input;

// Cross-cutting concerns
pub mod error;
pub mod observability;

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use http::HttpServer;
