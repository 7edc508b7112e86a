//! Schema types

use super::diagnostics::{Diagnostic, Diagnostics};
use crate::types::{AttributeType, JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single schema attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Value type
    #[serde(rename = "type")]
    pub attr_type: AttributeType,

    /// Markdown description
    #[serde(default)]
    pub description: String,

    /// Must be set in configuration
    #[serde(default)]
    pub required: bool,

    /// May be set in configuration
    #[serde(default)]
    pub optional: bool,

    /// Value is decided by the provider
    #[serde(default)]
    pub computed: bool,

    /// Value must be masked in output
    #[serde(default)]
    pub sensitive: bool,

    /// Value is only sent when the resource is created
    #[serde(default)]
    pub create_only: bool,

    /// Default for optional attributes left unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<JsonValue>,
}

impl Attribute {
    fn with_type(attr_type: AttributeType) -> Self {
        Self {
            attr_type,
            description: String::new(),
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            create_only: false,
            default: None,
        }
    }

    /// A required attribute
    pub fn required(attr_type: AttributeType) -> Self {
        Self {
            required: true,
            ..Self::with_type(attr_type)
        }
    }

    /// An optional attribute
    pub fn optional(attr_type: AttributeType) -> Self {
        Self {
            optional: true,
            ..Self::with_type(attr_type)
        }
    }

    /// A read-only attribute set by the provider
    pub fn computed(attr_type: AttributeType) -> Self {
        Self {
            computed: true,
            ..Self::with_type(attr_type)
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: JsonValue) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    #[must_use]
    pub fn create_only(mut self) -> Self {
        self.create_only = true;
        self
    }

    /// Whether users may set this attribute in configuration
    pub fn is_configurable(&self) -> bool {
        self.required || self.optional
    }
}

/// Attribute schema of a provider or resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Markdown description
    #[serde(default)]
    pub description: String,

    /// Attributes keyed by name
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    /// Create an empty schema
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Add an attribute
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Validate a configuration object against this schema
    ///
    /// `null` values count as unset.
    pub fn validate(&self, config: &JsonValue) -> Diagnostics {
        let mut diags = Diagnostics::new();

        let empty = JsonObject::new();
        let object = match config {
            JsonValue::Object(object) => object,
            JsonValue::Null => &empty,
            other => {
                diags.push(
                    Diagnostic::error("Invalid configuration")
                        .with_detail(format!("expected an object, got {}", json_kind(other))),
                );
                return diags;
            }
        };

        for (name, value) in object {
            let Some(attribute) = self.attributes.get(name) else {
                diags.push(
                    Diagnostic::error("Unsupported argument")
                        .with_detail(format!("An argument named \"{name}\" is not expected here."))
                        .with_attribute(name),
                );
                continue;
            };

            if value.is_null() {
                continue;
            }

            if !attribute.is_configurable() {
                diags.push(
                    Diagnostic::error("Invalid configuration for computed attribute")
                        .with_detail(format!(
                            "Can't configure a value for \"{name}\": its value will be decided automatically."
                        ))
                        .with_attribute(name),
                );
                continue;
            }

            if !attribute.attr_type.accepts(value) {
                diags.push(
                    Diagnostic::error("Incorrect attribute value type")
                        .with_detail(format!(
                            "expected {}, got {}",
                            attribute.attr_type,
                            json_kind(value)
                        ))
                        .with_attribute(name),
                );
            }
        }

        for (name, attribute) in &self.attributes {
            let present = object.get(name).is_some_and(|v| !v.is_null());
            if attribute.required && !present {
                diags.push(
                    Diagnostic::error("Missing required argument")
                        .with_detail(format!(
                            "The argument \"{name}\" is required, but no definition was found."
                        ))
                        .with_attribute(name),
                );
            }
        }

        diags
    }

    /// Fill unset optional attributes with their defaults
    pub fn apply_defaults(&self, config: &mut JsonObject) {
        for (name, attribute) in &self.attributes {
            let Some(ref default) = attribute.default else {
                continue;
            };
            let unset = config.get(name).map_or(true, JsonValue::is_null);
            if unset {
                config.insert(name.clone(), default.clone());
            }
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "list",
        JsonValue::Object(_) => "object",
    }
}
