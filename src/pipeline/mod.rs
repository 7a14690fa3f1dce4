//! Pipeline codec subsystem.
//!
//! # Data Flow
//! ```text
//! hf_pipeline identifier
//!     → registry.rs (lookup, closed set of four codecs)
//!     → codec encode(): raw input + parameters → V2Envelope
//!     → [downstream call happens in the handler]
//!     → codec decode(): V2Response + parameters → TaskOutput
//! ```
//!
//! # Design Decisions
//! - One codec implementation per pipeline, registered once at startup; adding
//!   a pipeline is a local extension, not an edit to a dispatch chain.
//! - Codecs are pure: no I/O, no state. Binary input acquisition happens in
//!   the handler before encode() is invoked.

pub mod codec;
pub mod registry;

mod object_detection;
mod text_generation;
mod token_classification;
mod zero_shot;

pub use codec::{InputKind, Parameters, PipelineCodec, PipelineInput};
pub use registry::CodecRegistry;
