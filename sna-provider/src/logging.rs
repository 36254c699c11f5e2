//! Log context for client construction

use sna_config::ResolvedConfig;
use sna_logging::{redacted_context, LogContext};

/// Context carrying `sna_host`, `sna_username` and `sna_password`, with
/// every sensitive attribute masked.
pub fn client_log_context(config: &ResolvedConfig) -> LogContext {
    let sensitive: Vec<&str> = config
        .fields()
        .filter(|(attribute, _)| attribute.is_sensitive())
        .map(|(attribute, _)| attribute.log_key())
        .collect();

    redacted_context(
        LogContext::new(),
        config
            .fields()
            .map(|(attribute, value)| (attribute.log_key(), value)),
        &sensitive,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sna_config::{ConfigResolver, MapEnv, ProviderConfigInput};
    use sna_logging::MASKED_PLACEHOLDER;

    #[test]
    fn test_only_password_is_masked() {
        let config = ConfigResolver::new(MapEnv::new())
            .resolve(
                &ProviderConfigInput::new()
                    .with_host("http://x")
                    .with_username("u")
                    .with_password("p"),
            )
            .unwrap()
            .config;

        let rendered = client_log_context(&config).render();

        assert_eq!(rendered["sna_host"], "http://x");
        assert_eq!(rendered["sna_username"], "u");
        assert_eq!(rendered["sna_password"], MASKED_PLACEHOLDER);
    }
}
