//! Provider schema declaration

use crate::error::ConfigResult;
use crate::field::Attribute;
use serde::Serialize;
use std::collections::BTreeMap;

pub const PROVIDER_DESCRIPTION: &str = "Interact with Secure Network Analytics.";

/// Declaration of one provider attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeSchema {
    pub description: String,
    pub optional: bool,
    pub sensitive: bool,
}

impl From<Attribute> for AttributeSchema {
    fn from(attribute: Attribute) -> Self {
        Self {
            description: attribute.description().to_string(),
            optional: true,
            sensitive: attribute.is_sensitive(),
        }
    }
}

/// Provider-level schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderSchema {
    pub description: String,
    pub attributes: BTreeMap<String, AttributeSchema>,
}

impl ProviderSchema {
    /// Schema declaring `host`, `username` and `password`
    pub fn new() -> Self {
        Self {
            description: PROVIDER_DESCRIPTION.to_string(),
            attributes: Attribute::ALL
                .into_iter()
                .map(|attribute| {
                    (
                        attribute.name().to_string(),
                        AttributeSchema::from(attribute),
                    )
                })
                .collect(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.get(name)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for ProviderSchema {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_declares_all_attributes() {
        let schema = ProviderSchema::new();

        assert_eq!(schema.description, PROVIDER_DESCRIPTION);
        assert_eq!(schema.attributes.len(), 3);
        assert!(schema.attributes.values().all(|a| a.optional));

        let password = schema.attribute("password").unwrap();
        assert!(password.sensitive);
        assert!(password.description.contains("SNA_PASSWORD"));
        assert!(!schema.attribute("host").unwrap().sensitive);
    }

    #[test]
    fn test_schema_json() {
        let json: serde_json::Value =
            serde_json::from_str(&ProviderSchema::new().to_json().unwrap()).unwrap();
        assert_eq!(json["attributes"]["username"]["optional"], true);
        assert_eq!(json["attributes"]["password"]["sensitive"], true);
    }
}
