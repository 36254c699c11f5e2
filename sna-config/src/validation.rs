//! Validation phases
//!
//! Each phase inspects every attribute it is given and appends one
//! diagnostic per problem. Phases never stop early; the gate between phases
//! lives in the resolver.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::field::{Attribute, ProviderConfigInput};
use crate::resolver::MergedValues;
use tracing::debug;

/// A named validation pass over some input
pub trait ValidationPhase<I: ?Sized> {
    /// Phase name for log output
    fn phase_name(&self) -> &'static str;

    /// Append a diagnostic for every problem found in `input`
    fn check(&self, input: &I, diagnostics: &mut Diagnostics);

    /// Run the phase on its own diagnostic collection
    fn run(&self, input: &I) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        self.check(input, &mut diagnostics);
        debug!(
            phase = self.phase_name(),
            diagnostics = diagnostics.len(),
            has_error = diagnostics.has_error(),
            "Validation phase finished"
        );
        diagnostics
    }
}

/// Rejects attributes whose value is not known yet
///
/// Absent attributes pass; they are filled from the environment later.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownValuePhase;

impl ValidationPhase<ProviderConfigInput> for UnknownValuePhase {
    fn phase_name(&self) -> &'static str {
        "unknown-values"
    }

    fn check(&self, input: &ProviderConfigInput, diagnostics: &mut Diagnostics) {
        for (attribute, value) in input.fields() {
            if value.is_unresolved() {
                diagnostics.push(unknown_value_diagnostic(attribute));
            }
        }
    }
}

/// Rejects attributes that are still empty after the environment merge
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingValuePhase;

impl ValidationPhase<MergedValues> for MissingValuePhase {
    fn phase_name(&self) -> &'static str {
        "missing-values"
    }

    fn check(&self, input: &MergedValues, diagnostics: &mut Diagnostics) {
        for (attribute, value) in input.fields() {
            if value.is_empty() {
                diagnostics.push(missing_value_diagnostic(attribute));
            }
        }
    }
}

/// Error for an attribute that depends on a value not computed yet
pub fn unknown_value_diagnostic(attribute: Attribute) -> Diagnostic {
    Diagnostic::attribute_error(
        attribute.path(),
        format!("Unknown Secure Network Analytics API {}", attribute.label()),
        format!(
            "The provider cannot create the Secure Network Analytics API client as there is an unknown configuration value for the Secure Network Analytics API {}. \
             Either target apply the source of the value first, set the value statically in the configuration, or use the {} environment variable.",
            attribute.name(),
            attribute.env_var(),
        ),
    )
}

/// Error for an attribute no source supplied a non-empty value for
pub fn missing_value_diagnostic(attribute: Attribute) -> Diagnostic {
    Diagnostic::attribute_error(
        attribute.path(),
        format!("Missing Secure Network Analytics API {}", attribute.label()),
        format!(
            "The provider cannot create the Secure Network Analytics API client as there is a missing or empty value for the Secure Network Analytics API {name}. \
             Set the {name} value in the configuration or use the {env} environment variable. \
             If either is already set, ensure the value is not empty.",
            name = attribute.name(),
            env = attribute.env_var(),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ConfigValue;

    #[test]
    fn test_unknown_phase_reports_each_unresolved_attribute() {
        let input = ProviderConfigInput::new()
            .with_host(ConfigValue::Unresolved)
            .with_username("u")
            .with_password(ConfigValue::Unresolved);

        let diagnostics = UnknownValuePhase.run(&input);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.has_error());
        let paths: Vec<_> = diagnostics
            .iter()
            .map(|d| d.path().map(ToString::to_string))
            .collect();
        assert_eq!(
            paths,
            vec![Some("host".to_string()), Some("password".to_string())]
        );
    }

    #[test]
    fn test_unknown_phase_accepts_absent() {
        let diagnostics = UnknownValuePhase.run(&ProviderConfigInput::new());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_value_text() {
        let diagnostic = unknown_value_diagnostic(Attribute::Username);
        assert_eq!(diagnostic.summary(), "Unknown Secure Network Analytics API Username");
        assert!(diagnostic.detail().contains("SNA_USERNAME"));
        assert!(diagnostic.detail().contains("API username."));
    }

    #[test]
    fn test_missing_value_text() {
        let diagnostic = missing_value_diagnostic(Attribute::Password);
        assert_eq!(diagnostic.summary(), "Missing Secure Network Analytics API Password");
        assert!(diagnostic.detail().contains("Set the password value in the configuration"));
        assert!(diagnostic.detail().contains("SNA_PASSWORD"));
        assert!(diagnostic.detail().ends_with("ensure the value is not empty."));
    }
}
