//! Structured logging for the Secure Network Analytics provider
//!
//! This crate provides:
//! - [`LogContext`], a set of structured fields attached to every event
//!   emitted through it, with per-key value masking
//! - subscriber initialisation on top of `tracing-subscriber`

pub mod config;
pub mod context;
pub mod init;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export main types for convenience
pub use config::{LogFormat, LoggingConfig};
pub use context::{redacted_context, LogContext, LogRecord, MASKED_PLACEHOLDER};
pub use init::{init_logging_from_config, init_simple_tracing};
pub use sna_interfaces::LogLevel;
