//! Structured log context with value masking
//!
//! A [`LogContext`] carries key/value fields that are attached to every event
//! emitted through it. Keys marked with
//! [`mask_field_values_with_field_keys`](LogContext::mask_field_values_with_field_keys)
//! keep their value for functional use but always render as
//! [`MASKED_PLACEHOLDER`].

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use sna_interfaces::LogLevel;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Rendered in place of a masked value
pub const MASKED_PLACEHOLDER: &str = "***";

const TARGET: &str = "sna";

#[derive(Clone, Default)]
pub struct LogContext {
    fields: BTreeMap<String, JsonValue>,
    masked_keys: BTreeSet<String>,
}

impl LogContext {
    /// Create a new empty log context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the context
    pub fn with_field(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.fields.insert(key.into(), json_value);
        }
        self
    }

    /// Add multiple fields to the context
    pub fn with_fields<I, K, V>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Serialize,
    {
        fields
            .into_iter()
            .fold(self, |context, (key, value)| context.with_field(key, value))
    }

    /// Mask the values of `keys` in every record produced from this context
    /// and from any context cloned from it. Masking cannot be undone.
    pub fn mask_field_values_with_field_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.masked_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn is_masked(&self, key: &str) -> bool {
        self.masked_keys.contains(key)
    }

    /// Unmasked value of a field
    pub fn field(&self, key: &str) -> Option<&JsonValue> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields as they appear in output, with masked values replaced
    pub fn render(&self) -> Map<String, JsonValue> {
        self.fields
            .iter()
            .map(|(key, value)| (key.clone(), self.rendered_value(key, value.clone())))
            .collect()
    }

    fn rendered_value(&self, key: &str, value: JsonValue) -> JsonValue {
        if self.is_masked(key) {
            JsonValue::String(MASKED_PLACEHOLDER.to_string())
        } else {
            value
        }
    }

    /// Build the record that [`emit`](Self::emit) would send
    pub fn record(&self, level: LogLevel, message: impl Into<String>) -> LogRecord {
        self.record_with(level, message, std::iter::empty::<(String, JsonValue)>())
    }

    /// Like [`record`](Self::record) with extra per-event fields.
    ///
    /// Extra fields override context fields of the same key and are masked
    /// the same way.
    pub fn record_with<I, K, V>(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        extra: I,
    ) -> LogRecord
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Serialize,
    {
        let mut fields = self.render();
        for (key, value) in extra {
            let key = key.into();
            if let Ok(value) = serde_json::to_value(value) {
                let value = self.rendered_value(&key, value);
                fields.insert(key, value);
            }
        }

        LogRecord {
            level,
            message: message.into(),
            fields,
        }
    }

    /// Emit an event through `tracing` carrying the rendered fields
    pub fn emit(&self, level: LogLevel, message: impl Into<String>) {
        self.record(level, message).emit();
    }

    pub fn emit_with<I, K, V>(&self, level: LogLevel, message: impl Into<String>, extra: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Serialize,
    {
        self.record_with(level, message, extra).emit();
    }
}

impl fmt::Debug for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogContext")
            .field("fields", &self.render())
            .field("masked_keys", &self.masked_keys)
            .finish()
    }
}

/// Attach `fields` to `context` and mask the values of `sensitive` keys
pub fn redacted_context<I, K, V>(context: LogContext, fields: I, sensitive: &[&str]) -> LogContext
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Serialize,
{
    context
        .with_fields(fields)
        .mask_field_values_with_field_keys(sensitive.iter().copied())
}

/// One structured event, already masked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub fields: Map<String, JsonValue>,
}

impl LogRecord {
    pub fn emit(&self) {
        let fields = JsonValue::Object(self.fields.clone());
        let message = &self.message;
        match self.level {
            LogLevel::Trace => tracing::trace!(target: TARGET, fields = %fields, "{}", message),
            LogLevel::Debug => tracing::debug!(target: TARGET, fields = %fields, "{}", message),
            LogLevel::Info => tracing::info!(target: TARGET, fields = %fields, "{}", message),
            LogLevel::Warn => tracing::warn!(target: TARGET, fields = %fields, "{}", message),
            LogLevel::Error => tracing::error!(target: TARGET, fields = %fields, "{}", message),
        }
    }
}
