use crate::config::{LogFormat, LoggingConfig};
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize logging from configuration
pub fn init_logging_from_config(config: &LoggingConfig) -> Result<()> {
    match config.format {
        LogFormat::Text => init_simple_tracing(config.level.as_str()),
        LogFormat::Json => {
            let env_filter = env_filter(config.level.as_str());

            // Use try_init to avoid panic if global subscriber already set
            if tracing_subscriber::fmt()
                .json()
                .with_env_filter(env_filter)
                .try_init()
                .is_err()
            {
                tracing::debug!("Global tracing subscriber already initialized, skipping");
            }

            Ok(())
        }
    }
}

/// Initialize simple tracing for basic console output
pub fn init_simple_tracing(log_level: &str) -> Result<()> {
    let env_filter = env_filter(log_level);

    if tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("Global tracing subscriber already initialized, skipping");
    }

    Ok(())
}

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
