//! Client handle and factory

use crate::config::HttpConfig;
use crate::errors::ClientError;
use reqwest::{redirect, Client};
use sna_config::{ClientFactory, ResolvedConfig};
use std::fmt;
use tracing::debug;
use url::Url;

/// Configured handle to a Secure Network Analytics API
///
/// Immutable after construction; share it behind an `Arc`.
#[derive(Clone)]
pub struct SnaClient {
    base_url: Url,
    username: String,
    password: String,
    http: Client,
}

impl SnaClient {
    /// Build a client from a resolved configuration
    pub fn new(config: ResolvedConfig, http_config: &HttpConfig) -> Result<Self, ClientError> {
        let base_url = parse_host(config.host())?;

        let http = Client::builder()
            .timeout(http_config.timeout)
            .user_agent(http_config.user_agent.as_str())
            .redirect(redirect::Policy::limited(http_config.max_redirects))
            .danger_accept_invalid_certs(!http_config.verify_ssl)
            .build()?;

        debug!(
            host = %base_url,
            timeout_secs = http_config.timeout.as_secs(),
            "Created Secure Network Analytics HTTP client"
        );

        Ok(Self {
            base_url,
            username: config.username().to_string(),
            password: config.password().to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Underlying HTTP client, for the data sources and resources
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Absolute URL of an API path relative to the host
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|source| ClientError::InvalidUrl {
                url: path.to_string(),
                source,
            })
    }
}

impl fmt::Debug for SnaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnaClient")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

fn parse_host(host: &str) -> Result<Url, ClientError> {
    let url = Url::parse(host).map_err(|source| ClientError::InvalidUrl {
        url: host.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ClientError::UnsupportedScheme(scheme.to_string())),
    }
}

/// Default [`ClientFactory`] producing [`SnaClient`] handles
#[derive(Debug, Clone, Default)]
pub struct SnaClientFactory {
    config: HttpConfig,
}

impl SnaClientFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HttpConfig) -> Self {
        Self { config }
    }
}

impl ClientFactory for SnaClientFactory {
    type Client = SnaClient;
    type Error = ClientError;

    fn construct(&self, config: ResolvedConfig) -> Result<SnaClient, ClientError> {
        SnaClient::new(config, &self.config)
    }
}
