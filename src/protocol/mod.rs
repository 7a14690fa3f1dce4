//! V2 wire protocol types.
//!
//! # Data Flow
//! ```text
//! PredictRequest
//!     → pipeline codec encode()
//!     → V2Envelope (named input tensors)
//!     → POST to model deployment endpoint
//!     → V2Response (named output tensors)
//!     → pipeline codec decode()
//!     → TaskOutput
//! ```
//!
//! # Design Decisions
//! - Tensor data is carried as `serde_json::Value` so one payload type serves
//!   strings, labels, scores, and raw byte values alike.
//! - Envelope inputs use a BTreeMap for deterministic serialization order.

pub mod envelope;

pub use envelope::{Dtype, OutputTensor, TensorPayload, V2Envelope, V2Response};
