//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → shared by value/Arc with the server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded.
//! - All fields have defaults so a missing file still boots a working gateway.
//! - Validation separates syntactic (serde) from semantic checks.

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::{GatewayConfig, ListenerConfig, ObservabilityConfig, TimeoutConfig};
