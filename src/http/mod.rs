//! HTTP surface of the gateway.
//!
//! # Data Flow
//! ```text
//! POST /predict
//!     → request.rs (PredictRequest shape, request ID layer)
//!     → server.rs (codec lookup, input resolution, encode)
//!     → downstream client (one outbound POST)
//!     → server.rs (decode or error mapping)
//!     → JSON response
//! ```

pub mod request;
pub mod server;

pub use request::{PredictRequest, RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
