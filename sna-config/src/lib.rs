//! Configuration resolution for the Secure Network Analytics provider
//!
//! Resolves the provider's `host`, `username` and `password` from explicit
//! values and `SNA_*` environment defaults. Resolution runs in phases that
//! accumulate diagnostics and halt at a gate as soon as a phase reports an
//! error, so the caller gets either a complete [`ResolvedConfig`] or every
//! field-level problem found in one attempt.

pub mod diagnostics;
pub mod env;
pub mod error;
pub mod factory;
pub mod field;
pub mod loader;
pub mod resolver;
pub mod schema;
pub mod validation;

// Re-export main types
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use error::{ConfigError, ConfigResult};
pub use factory::{construct_client, ClientFactory};
pub use field::{Attribute, AttributePath, ConfigValue, ProviderConfigInput};
pub use loader::ConfigLoader;
pub use resolver::{ConfigResolver, MergedValues, Resolution, ResolvedConfig};
pub use schema::{AttributeSchema, ProviderSchema};
pub use validation::{MissingValuePhase, UnknownValuePhase, ValidationPhase};
