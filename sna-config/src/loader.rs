//! Loading raw provider configuration from documents

use crate::error::ConfigResult;
use crate::field::ProviderConfigInput;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// On-disk shape of the provider block.
///
/// A missing or `null` attribute is absent. Unknown values cannot be written
/// in a document.
#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProviderConfig {
    #[serde(default)]
    host: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

impl From<RawProviderConfig> for ProviderConfigInput {
    fn from(raw: RawProviderConfig) -> Self {
        ProviderConfigInput::new()
            .with_host(raw.host)
            .with_username(raw.username)
            .with_password(raw.password)
    }
}

/// Reads [`ProviderConfigInput`] from YAML or JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load from a file; `.json` files are read as JSON, anything else as YAML
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<ProviderConfigInput> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loading provider configuration");

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => self.from_json_str(&content),
            _ => self.from_yaml_str(&content),
        }
    }

    pub fn from_yaml_str(&self, content: &str) -> ConfigResult<ProviderConfigInput> {
        let raw: RawProviderConfig = serde_yaml::from_str(content)?;
        Ok(raw.into())
    }

    pub fn from_json_str(&self, content: &str) -> ConfigResult<ProviderConfigInput> {
        let raw: RawProviderConfig = serde_json::from_str(content)?;
        Ok(raw.into())
    }

    /// Load from `config_path` if given; otherwise every attribute is absent
    /// and resolution relies on the environment alone.
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<ProviderConfigInput> {
        match config_path {
            Some(path) => self.from_file(path),
            None => Ok(ProviderConfigInput::new()),
        }
    }
}
