//! Client error types

/// Error type for client construction
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid host URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}
