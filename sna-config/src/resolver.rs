//! Precedence merge and the phased resolution pipeline

use crate::diagnostics::Diagnostics;
use crate::env::{EnvSource, ProcessEnv};
use crate::field::{Attribute, ConfigValue, ProviderConfigInput};
use crate::validation::{MissingValuePhase, UnknownValuePhase, ValidationPhase};
use std::fmt;
use tracing::{debug, trace};

const MASKED: &str = "***";

/// Attribute values after merging explicit input with the environment.
///
/// Values may still be empty; [`MissingValuePhase`] decides whether they are
/// usable.
#[derive(Clone, PartialEq, Eq)]
pub struct MergedValues {
    host: String,
    username: String,
    password: String,
}

impl MergedValues {
    /// Merge every attribute of `input` with its environment variable
    pub fn merge(input: &ProviderConfigInput, env: &impl EnvSource) -> Self {
        let resolve = |attribute: Attribute| {
            let value = precedence(input.get(attribute), env.var(attribute.env_var()));
            trace!(
                attribute = attribute.name(),
                explicit = input.get(attribute).as_present().is_some(),
                empty = value.is_empty(),
                "Merged attribute"
            );
            value
        };

        Self {
            host: resolve(Attribute::Host),
            username: resolve(Attribute::Username),
            password: resolve(Attribute::Password),
        }
    }

    pub fn get(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Host => &self.host,
            Attribute::Username => &self.username,
            Attribute::Password => &self.password,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (Attribute, &str)> {
        Attribute::ALL
            .into_iter()
            .map(move |attribute| (attribute, self.get(attribute)))
    }
}

impl fmt::Debug for MergedValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergedValues")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &MASKED)
            .finish()
    }
}

/// Merge one explicit value with its environment fallback.
///
/// The environment value (empty when unset) is the default; a present
/// explicit value always replaces it, even an empty one.
pub fn precedence(explicit: &ConfigValue, env_value: Option<String>) -> String {
    match explicit {
        ConfigValue::Present(value) => value.clone(),
        ConfigValue::Absent | ConfigValue::Unresolved => env_value.unwrap_or_default(),
    }
}

/// Fully resolved provider configuration
///
/// Only produced by [`ConfigResolver::resolve`] after every phase passed, so
/// all three values are non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    host: String,
    username: String,
    password: String,
}

impl ResolvedConfig {
    fn from_merged(merged: MergedValues) -> Self {
        Self {
            host: merged.host,
            username: merged.username,
            password: merged.password,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn get(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Host => &self.host,
            Attribute::Username => &self.username,
            Attribute::Password => &self.password,
        }
    }

    /// Attributes paired with their resolved values, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (Attribute, &str)> {
        Attribute::ALL
            .into_iter()
            .map(move |attribute| (attribute, self.get(attribute)))
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &MASKED)
            .finish()
    }
}

/// Successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub config: ResolvedConfig,
    /// Warnings collected along the way; never contains an error
    pub diagnostics: Diagnostics,
}

/// Resolves provider configuration against an environment
///
/// Holds no state between calls: every [`resolve`](Self::resolve) reads
/// the environment again.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver<E = ProcessEnv> {
    env: E,
}

impl ConfigResolver<ProcessEnv> {
    /// Resolver backed by the process environment
    pub fn from_process_env() -> Self {
        Self { env: ProcessEnv }
    }
}

impl<E: EnvSource> ConfigResolver<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Run the phases in order, halting at the first gate that sees an error.
    ///
    /// 1. reject unresolved attributes
    /// 2. merge explicit values with the environment
    /// 3. reject attributes that are still empty
    pub fn resolve(&self, input: &ProviderConfigInput) -> Result<Resolution, Diagnostics> {
        let mut diagnostics = UnknownValuePhase.run(input).gate()?;

        let merged = MergedValues::merge(input, &self.env);

        diagnostics.append(MissingValuePhase.run(&merged));
        let diagnostics = diagnostics.gate()?;

        debug!(warnings = diagnostics.len(), "Provider configuration resolved");

        Ok(Resolution {
            config: ResolvedConfig::from_merged(merged),
            diagnostics,
        })
    }
}
