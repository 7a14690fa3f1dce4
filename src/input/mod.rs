//! Binary input acquisition.
//!
//! Pipelines with binary inputs (object-detection) carry a descriptor in the
//! `inputs` field instead of the payload itself; this subsystem turns that
//! descriptor into raw bytes before envelope construction.

pub mod resolver;

pub use resolver::InputResolver;
