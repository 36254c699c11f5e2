//! Secure Network Analytics API client
//!
//! Builds the client handle the provider shares with its data sources and
//! resources. Construction validates the host and prepares an HTTP client;
//! it never talks to the network.

pub mod client;
pub mod config;
pub mod errors;

// Re-export main types for convenience
pub use client::{SnaClient, SnaClientFactory};
pub use config::HttpConfig;
pub use errors::ClientError;
