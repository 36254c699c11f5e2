//! # SNA Interfaces
//!
//! Interfaces shared by the Secure Network Analytics provider crates.
//!
//! This crate is the neutral ground between the provider and the
//! collaborators it configures. It carries no behaviour of its own.
//!
//! ## Main Interfaces
//!
//! - [`DataSource`] / [`Resource`] - CRUD collaborators that receive the
//!   configured client during their own setup
//! - [`ProviderData`] - shared, read-only handle to the configured client
//! - [`LogLevel`] - severity levels used by the structured logging context

pub mod logging;
pub mod provider;

pub use logging::{LogLevel, LogLevelParseError};
pub use provider::{DataSource, DataSourceConstructor, ProviderData, Resource, ResourceConstructor};
