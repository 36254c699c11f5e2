//! Secure Network Analytics provider
//!
//! Declares the provider schema, resolves its configuration once per
//! [`SnaProvider::configure`] call, builds the API client and hands it to the
//! registered data sources and resources.

pub mod logging;
pub mod provider;
pub mod response;

pub use logging::client_log_context;
pub use provider::{ProviderMetadata, SnaProvider, PROVIDER_TYPE_NAME};
pub use response::ConfigureResponse;
