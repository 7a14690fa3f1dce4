//! Downstream model endpoint client.

pub mod client;

pub use client::DownstreamClient;
