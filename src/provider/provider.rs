//! Provider and configured provider

use super::config::ProviderConfig;
use crate::error::Error;
use crate::mailjet::MailjetClient;
use crate::resource::{Resource, ResourceData, ResourceState, SubaccountResource};
use crate::schema::{Diagnostic, Diagnostics, Schema};
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

type ResourceMap = BTreeMap<&'static str, Arc<dyn Resource>>;

/// Outcome of a resource operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Resulting state; `None` when the resource does not exist
    pub state: Option<ResourceState>,
    /// Errors and warnings raised by the operation
    #[serde(default)]
    pub diagnostics: Diagnostics,
}

impl Response {
    fn new(state: Option<ResourceState>, diagnostics: Diagnostics) -> Self {
        Self { state, diagnostics }
    }

    fn failed(state: Option<ResourceState>, err: impl Into<Diagnostics>) -> Self {
        Self::new(state, err.into())
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Unconfigured provider: schemas and resource registry
pub struct Provider {
    version: String,
    resources: ResourceMap,
}

impl Provider {
    /// Create the provider with all resources registered
    pub fn new(version: impl Into<String>) -> Self {
        let mut provider = Self {
            version: version.into(),
            resources: BTreeMap::new(),
        };
        provider.register(Arc::new(SubaccountResource::new()));
        provider
    }

    fn register(&mut self, resource: Arc<dyn Resource>) {
        self.resources.insert(resource.type_name(), resource);
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Schema of the provider config block
    pub fn schema(&self) -> Schema {
        ProviderConfig::schema()
    }

    /// Registered resource type names
    pub fn resource_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.resources.keys().copied()
    }

    /// Schemas of all registered resources
    pub fn resource_schemas(&self) -> BTreeMap<String, Schema> {
        self.resources
            .iter()
            .map(|(name, resource)| ((*name).to_string(), resource.schema()))
            .collect()
    }

    /// Provider and resource schemas as one JSON document
    pub fn schema_document(&self) -> JsonValue {
        json!({
            "version": self.version,
            "provider": self.schema(),
            "resource_schemas": self.resource_schemas(),
        })
    }

    /// Validate the provider config block and build the shared client
    pub fn configure(
        &self,
        config: &JsonValue,
    ) -> std::result::Result<ConfiguredProvider, Diagnostics> {
        let schema = self.schema();
        let diags = schema.validate(config);
        if diags.has_errors() {
            return Err(diags);
        }

        let mut values = config.as_object().cloned().unwrap_or_default();
        schema.apply_defaults(&mut values);

        let client = ProviderConfig::from_value(JsonValue::Object(values))
            .and_then(|config| config.build_client())
            .map_err(Diagnostics::from)?;

        info!(
            version = %self.version,
            base_url = client.base_url(),
            "configured Mailjet provider"
        );

        Ok(ConfiguredProvider {
            resources: self.resources.clone(),
            client: Arc::new(client),
        })
    }
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("version", &self.version)
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Provider with a client handle, ready to run resource operations
#[derive(Clone)]
pub struct ConfiguredProvider {
    resources: ResourceMap,
    client: Arc<MailjetClient>,
}

impl ConfiguredProvider {
    /// Whether a resource type is registered
    pub fn has_resource(&self, type_name: &str) -> bool {
        self.resources.contains_key(type_name)
    }

    /// Shared Mailjet client handle
    pub fn client(&self) -> &Arc<MailjetClient> {
        &self.client
    }

    fn resource(&self, type_name: &str) -> std::result::Result<&Arc<dyn Resource>, Diagnostics> {
        self.resources
            .get(type_name)
            .ok_or_else(|| Error::unknown_resource(type_name).into())
    }

    /// Validate a resource config and fill in defaults
    fn plan(
        resource: &dyn Resource,
        config: &JsonValue,
    ) -> std::result::Result<(JsonObject, Diagnostics), Diagnostics> {
        let schema = resource.schema();
        let diags = schema.validate(config);
        if diags.has_errors() {
            return Err(diags);
        }
        let mut values = config.as_object().cloned().unwrap_or_default();
        schema.apply_defaults(&mut values);
        Ok((values, diags))
    }

    /// Create a resource from its config
    pub async fn create(&self, type_name: &str, config: &JsonValue) -> Response {
        let resource = match self.resource(type_name) {
            Ok(resource) => resource,
            Err(diags) => return Response::failed(None, diags),
        };
        let (values, mut diags) = match Self::plan(resource.as_ref(), config) {
            Ok(planned) => planned,
            Err(diags) => return Response::failed(None, diags),
        };

        debug!(resource = type_name, "creating resource");
        let mut data = ResourceData::new(values);
        if let Err(e) = resource.create(&mut data, &self.client).await {
            diags.push(Diagnostic::from(e));
        }
        Response::new(data.into_state(), diags)
    }

    /// Refresh a resource from the remote service
    pub async fn read(&self, type_name: &str, state: ResourceState) -> Response {
        let resource = match self.resource(type_name) {
            Ok(resource) => resource,
            Err(diags) => return Response::failed(Some(state), diags),
        };

        debug!(resource = type_name, id = %state.id, "reading resource");
        let mut data = ResourceData::from(state.clone());
        match resource.read(&mut data, &self.client).await {
            Ok(()) => Response::new(data.into_state(), Diagnostics::new()),
            Err(e) => Response::failed(Some(state), e),
        }
    }

    /// Apply a changed config to an existing resource
    pub async fn update(&self, type_name: &str, prior: ResourceState, config: &JsonValue) -> Response {
        let resource = match self.resource(type_name) {
            Ok(resource) => resource,
            Err(diags) => return Response::failed(Some(prior), diags),
        };
        let (mut values, mut diags) = match Self::plan(resource.as_ref(), config) {
            Ok(planned) => planned,
            Err(diags) => return Response::failed(Some(prior), diags),
        };

        let schema = resource.schema();
        for (name, attribute) in &schema.attributes {
            if !attribute.create_only {
                continue;
            }
            let planned = values.get(name).filter(|v| !v.is_null());
            let current = prior.attributes.get(name).filter(|v| !v.is_null());
            if planned.is_some() && current.is_some() && planned != current {
                diags.push(
                    Diagnostic::warning("Attribute can only be set at creation")
                        .with_detail(format!(
                            "Changing \"{name}\" has no effect on an existing {type_name}; \
                             the current value is kept."
                        ))
                        .with_attribute(name),
                );
            }
            values.remove(name);
        }

        // Unset optional attributes become explicit nulls so they are cleared locally.
        for (name, attribute) in &schema.attributes {
            if attribute.optional && !values.contains_key(name) {
                values.insert(name.clone(), JsonValue::Null);
            }
        }

        debug!(resource = type_name, id = %prior.id, "updating resource");
        let mut data = ResourceData::from(prior.clone());
        data.merge(values);
        match resource.update(&mut data, &self.client).await {
            Ok(()) => Response::new(data.into_state(), diags),
            Err(e) => {
                diags.push(Diagnostic::from(e));
                Response::new(Some(prior), diags)
            }
        }
    }

    /// Destroy a resource
    pub async fn delete(&self, type_name: &str, state: ResourceState) -> Response {
        let resource = match self.resource(type_name) {
            Ok(resource) => resource,
            Err(diags) => return Response::failed(Some(state), diags),
        };

        debug!(resource = type_name, id = %state.id, "deleting resource");
        let mut data = ResourceData::from(state.clone());
        match resource.delete(&mut data, &self.client).await {
            Ok(()) => Response::default(),
            Err(e) => Response::failed(Some(state), e),
        }
    }

    /// Adopt an existing remote object into state
    pub async fn import(&self, type_name: &str, id: &str) -> Response {
        let resource = match self.resource(type_name) {
            Ok(resource) => resource,
            Err(diags) => return Response::failed(None, diags),
        };

        debug!(resource = type_name, id, "importing resource");
        match resource.import(id, &self.client).await {
            Ok(data) => Response::new(data.into_state(), Diagnostics::new()),
            Err(e) => Response::failed(None, e),
        }
    }
}

impl std::fmt::Debug for ConfiguredProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfiguredProvider")
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .field("client", &self.client)
            .finish()
    }
}
