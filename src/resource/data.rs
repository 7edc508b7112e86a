//! Attribute storage for a single resource instance

use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// Persistable state of a resource instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    /// Identity assigned by the remote service
    pub id: String,
    /// Attribute values keyed by name
    #[serde(default)]
    pub attributes: JsonObject,
}

/// Working copy of a resource instance passed to lifecycle handlers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceData {
    id: Option<String>,
    attributes: JsonObject,
}

impl ResourceData {
    /// Data for a not-yet-created instance
    pub fn new(attributes: JsonObject) -> Self {
        Self {
            id: None,
            attributes,
        }
    }

    /// Identity, if the instance exists remotely
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.attributes.get(key).filter(|v| !v.is_null())
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(JsonValue::as_str).map(String::from)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(JsonValue::as_bool)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn attributes(&self) -> &JsonObject {
        &self.attributes
    }

    /// Overlay values on top of the current attributes
    pub fn merge(&mut self, values: JsonObject) {
        for (key, value) in values {
            self.attributes.insert(key, value);
        }
    }

    /// Convert to persistable state; `None` when no identity was set
    pub fn into_state(self) -> Option<ResourceState> {
        let id = self.id.filter(|id| !id.is_empty())?;
        Some(ResourceState {
            id,
            attributes: self.attributes,
        })
    }
}

impl From<ResourceState> for ResourceData {
    fn from(state: ResourceState) -> Self {
        Self {
            id: Some(state.id),
            attributes: state.attributes,
        }
    }
}
