//! Provider attributes and their tri-state values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration attribute declared by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Host,
    Username,
    Password,
}

impl Attribute {
    /// Every attribute, in declaration order
    pub const ALL: [Attribute; 3] = [Attribute::Host, Attribute::Username, Attribute::Password];

    /// Attribute name as written in the provider configuration
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Host => "host",
            Attribute::Username => "username",
            Attribute::Password => "password",
        }
    }

    /// Capitalised name used in diagnostic summaries
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Host => "Host",
            Attribute::Username => "Username",
            Attribute::Password => "Password",
        }
    }

    /// Environment variable consulted when the attribute is absent
    pub fn env_var(&self) -> &'static str {
        match self {
            Attribute::Host => "SNA_HOST",
            Attribute::Username => "SNA_USERNAME",
            Attribute::Password => "SNA_PASSWORD",
        }
    }

    /// Key used for this attribute in structured log contexts
    pub fn log_key(&self) -> &'static str {
        match self {
            Attribute::Host => "sna_host",
            Attribute::Username => "sna_username",
            Attribute::Password => "sna_password",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Attribute::Host => {
                "URI for Secure Network Analytics API. May also be provided via SNA_HOST environment variable."
            }
            Attribute::Username => {
                "Username for Secure Network Analytics API. May also be provided via SNA_USERNAME environment variable."
            }
            Attribute::Password => {
                "Password for Secure Network Analytics API. May also be provided via SNA_PASSWORD environment variable."
            }
        }
    }

    /// Whether the value must be masked in logs and debug output
    pub fn is_sensitive(&self) -> bool {
        matches!(self, Attribute::Password)
    }

    /// Path of this attribute at the root of the provider configuration
    pub fn path(&self) -> AttributePath {
        AttributePath::root(self.name())
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Location of an attribute inside a configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributePath {
    steps: Vec<String>,
}

impl AttributePath {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            steps: vec![name.into()],
        }
    }

    /// Extend the path with a nested attribute name
    pub fn at_name(mut self, name: impl Into<String>) -> Self {
        self.steps.push(name.into());
        self
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.steps.join("."))
    }
}

/// Tri-state value of one configuration attribute
#[derive(Clone, Default, PartialEq, Eq)]
pub enum ConfigValue {
    /// Not provided; the environment default applies
    #[default]
    Absent,
    /// Depends on an upstream computation that has not run yet
    Unresolved,
    /// Concrete value provided by the caller
    Present(String),
}

impl ConfigValue {
    pub fn present(value: impl Into<String>) -> Self {
        ConfigValue::Present(value.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ConfigValue::Absent)
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, ConfigValue::Unresolved)
    }

    /// The concrete value, if one was provided
    pub fn as_present(&self) -> Option<&str> {
        match self {
            ConfigValue::Present(value) => Some(value),
            _ => None,
        }
    }
}

// Values can be secrets, so Debug never prints them.
impl fmt::Debug for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Absent => f.write_str("Absent"),
            ConfigValue::Unresolved => f.write_str("Unresolved"),
            ConfigValue::Present(_) => f.write_str("Present(..)"),
        }
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Present(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Present(value.to_string())
    }
}

impl From<Option<String>> for ConfigValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(ConfigValue::Absent, ConfigValue::Present)
    }
}

/// Raw provider configuration as supplied by the caller
///
/// Immutable once built; resolution only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderConfigInput {
    host: ConfigValue,
    username: ConfigValue,
    password: ConfigValue,
}

impl ProviderConfigInput {
    /// Configuration with every attribute absent
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, value: impl Into<ConfigValue>) -> Self {
        self.host = value.into();
        self
    }

    pub fn with_username(mut self, value: impl Into<ConfigValue>) -> Self {
        self.username = value.into();
        self
    }

    pub fn with_password(mut self, value: impl Into<ConfigValue>) -> Self {
        self.password = value.into();
        self
    }

    /// Set any attribute by name
    pub fn with(self, attribute: Attribute, value: impl Into<ConfigValue>) -> Self {
        match attribute {
            Attribute::Host => self.with_host(value),
            Attribute::Username => self.with_username(value),
            Attribute::Password => self.with_password(value),
        }
    }

    pub fn get(&self, attribute: Attribute) -> &ConfigValue {
        match attribute {
            Attribute::Host => &self.host,
            Attribute::Username => &self.username,
            Attribute::Password => &self.password,
        }
    }

    /// Attributes paired with their values, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (Attribute, &ConfigValue)> {
        Attribute::ALL
            .into_iter()
            .map(move |attribute| (attribute, self.get(attribute)))
    }
}
