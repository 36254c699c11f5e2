//! Client factory boundary
//!
//! The provider never builds its API client directly. It hands the resolved
//! configuration to a [`ClientFactory`] and turns a failure into a single
//! diagnostic.

use crate::diagnostics::Diagnostic;
use crate::resolver::ResolvedConfig;
use std::fmt;
use tracing::warn;

pub const CLIENT_CONSTRUCTION_SUMMARY: &str =
    "Unable to Create Secure Network Analytics API Client";

/// Builds the API client from a resolved configuration
pub trait ClientFactory {
    type Client;
    type Error: fmt::Display;

    /// Construct a client. Takes ownership of the configuration.
    fn construct(&self, config: ResolvedConfig) -> Result<Self::Client, Self::Error>;
}

/// Invoke `factory` once, wrapping a failure as a construction diagnostic.
///
/// There is no retry.
pub fn construct_client<F>(factory: &F, config: ResolvedConfig) -> Result<F::Client, Diagnostic>
where
    F: ClientFactory + ?Sized,
{
    factory.construct(config).map_err(|e| {
        warn!(error = %e, "Client construction failed");
        client_construction_diagnostic(&e)
    })
}

/// Provider-level error carrying the factory's error text verbatim
pub fn client_construction_diagnostic(error: &dyn fmt::Display) -> Diagnostic {
    Diagnostic::error(
        CLIENT_CONSTRUCTION_SUMMARY,
        format!(
            "An unexpected error occurred when creating the Secure Network Analytics API client. \
             If the error is not clear, please contact the provider developers.\n\n\
             Secure Network Analytics Client Error: {}",
            error
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use crate::env::MapEnv;
    use crate::field::ProviderConfigInput;
    use crate::resolver::ConfigResolver;
    use mockall::mock;

    mock! {
        Factory {}

        impl ClientFactory for Factory {
            type Client = String;
            type Error = String;

            fn construct(&self, config: ResolvedConfig) -> Result<String, String>;
        }
    }

    fn resolved() -> ResolvedConfig {
        ConfigResolver::new(MapEnv::new())
            .resolve(
                &ProviderConfigInput::new()
                    .with_host("http://x")
                    .with_username("u")
                    .with_password("p"),
            )
            .unwrap()
            .config
    }

    #[test]
    fn test_success_returns_client() {
        let mut factory = MockFactory::new();
        factory
            .expect_construct()
            .times(1)
            .returning(|config| Ok(format!("client for {}", config.host())));

        let client = construct_client(&factory, resolved()).unwrap();
        assert_eq!(client, "client for http://x");
    }

    #[test]
    fn test_failure_becomes_single_diagnostic() {
        let mut factory = MockFactory::new();
        factory
            .expect_construct()
            .times(1)
            .returning(|_| Err("connection refused".to_string()));

        let diagnostic = construct_client(&factory, resolved()).unwrap_err();

        assert_eq!(diagnostic.severity(), Severity::Error);
        assert_eq!(diagnostic.summary(), CLIENT_CONSTRUCTION_SUMMARY);
        assert!(diagnostic.path().is_none());
        assert!(diagnostic
            .detail()
            .ends_with("Secure Network Analytics Client Error: connection refused"));
    }
}
