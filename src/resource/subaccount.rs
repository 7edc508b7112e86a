//! `mailjet_subaccount` resource
//!
//! Maps the resource attributes onto the Mailjet `apikey` REST resource:
//! create is a POST, read a GET by ID and update a PUT by ID carrying only
//! `IsActive`/`ACL`. Delete is not supported by this provider.

use super::{Resource, ResourceData};
use crate::error::{Error, Result};
use crate::mailjet::{ApiKey, ApiKeyCreate, ApiKeyUpdate, MailjetClient};
use crate::schema::{Attribute, Schema};
use crate::types::{AttributeType, JsonValue, OptionStringExt};
use async_trait::async_trait;
use chrono::SecondsFormat;
use serde_json::json;
use tracing::{error, trace};

/// Resource type name
pub const SUBACCOUNT_TYPE: &str = "mailjet_subaccount";

/// Sub-account API key resource
#[derive(Debug, Clone, Copy, Default)]
pub struct SubaccountResource;

impl SubaccountResource {
    pub fn new() -> Self {
        Self
    }

    fn parse_id(data: &ResourceData) -> Result<i64> {
        let id = data.id().ok_or(Error::MissingId)?;
        id.parse::<i64>()
            .map_err(|e| Error::invalid_id(id, e.to_string()))
    }

    /// Overwrite local attributes with the server's view of the key
    fn apply(data: &mut ResourceData, key: &ApiKey) {
        data.set("name", key.name.clone());
        data.set("active", key.is_active);
        data.set(
            "acl",
            key.acl
                .clone()
                .none_if_empty()
                .map_or(JsonValue::Null, JsonValue::from),
        );
        data.set(
            "created_at",
            key.created_at.map_or(JsonValue::Null, |ts| {
                JsonValue::from(ts.to_rfc3339_opts(SecondsFormat::Secs, true))
            }),
        );
        data.set("api_key", key.api_key.clone());
        data.set("secret_key", key.secret_key.clone());
        data.set("primary", key.is_master);
        data.set("quarantine_value", key.quarantine_value);
        data.set("run_level", key.runlevel.clone());
        data.set("track_host", key.track_host.clone());
        data.set("user_id", key.user_id);
    }
}

fn log_failure(operation: &'static str) -> impl Fn(&Error) {
    move |e: &Error| {
        error!(
            resource = SUBACCOUNT_TYPE,
            operation,
            error = %e,
            "Mailjet sub account {operation} failed"
        );
    }
}

#[async_trait]
impl Resource for SubaccountResource {
    fn type_name(&self) -> &'static str {
        SUBACCOUNT_TYPE
    }

    fn schema(&self) -> Schema {
        Schema::new("Mailjet Sub Account Resource")
            .with_attribute(
                "name",
                Attribute::required(AttributeType::String)
                    .create_only()
                    .with_description("User readable name for this API Key."),
            )
            .with_attribute(
                "active",
                Attribute::optional(AttributeType::Bool)
                    .with_default(json!(true))
                    .with_description("Indicates whether this API Key is active or not."),
            )
            .with_attribute(
                "acl",
                Attribute::optional(AttributeType::String).with_description(
                    "Access Control List. Indicates permissions attached to a resource.",
                ),
            )
            .with_attribute(
                "created_at",
                Attribute::computed(AttributeType::String)
                    .with_description("Timestamp indicating when the API Key was created."),
            )
            .with_attribute(
                "api_key",
                Attribute::computed(AttributeType::String)
                    .with_description("The unique alphanumeric API Key itself."),
            )
            .with_attribute(
                "secret_key",
                Attribute::computed(AttributeType::String)
                    .sensitive()
                    .with_description(
                        "The unique alphanumeric Secret Key (password) linked to this API Key.",
                    ),
            )
            .with_attribute(
                "primary",
                Attribute::computed(AttributeType::Bool)
                    .with_description("Indicates whether this is the Primary API Key or not."),
            )
            .with_attribute(
                "quarantine_value",
                Attribute::computed(AttributeType::Int).with_description(
                    "Indicates the sending limitation applied on this API Key in terms of \
                     messages per hour, when the API Key is under quarantine. \
                     0 means no limitation is applied.",
                ),
            )
            .with_attribute(
                "run_level",
                Attribute::computed(AttributeType::String).with_description(
                    "Runlevel, used to indicate data is migrated and reduced performance is \
                     expected. Possible values: `Normal`, `Softlock`, `Hardlock`. \
                     Default value: `Normal`.",
                ),
            )
            .with_attribute(
                "track_host",
                Attribute::computed(AttributeType::String).with_description(
                    "Host to be used when tracking clicks, opens, unsubscribe requests for \
                     this API Key. Default value: `r.mailjet.com`.",
                ),
            )
            .with_attribute(
                "user_id",
                Attribute::computed(AttributeType::Int).with_description(
                    "User ID. The Primary API Key and all sub-account API Keys will have the \
                     same user ID.",
                ),
            )
    }

    async fn create(&self, data: &mut ResourceData, client: &MailjetClient) -> Result<()> {
        let payload = ApiKeyCreate {
            name: data
                .get_string("name")
                .ok_or_else(|| Error::missing_field("name"))?,
            is_active: data.get_bool("active").unwrap_or(true),
            acl: data.get_string("acl").none_if_empty(),
        };

        let key = client
            .create_api_key(&payload)
            .await
            .inspect_err(log_failure("create"))?;

        let id = key.id.to_string();
        data.set_id(id.clone());
        trace!(id = %id, "created a Mailjet sub account");

        self.read(data, client).await
    }

    async fn read(&self, data: &mut ResourceData, client: &MailjetClient) -> Result<()> {
        let id = Self::parse_id(data).inspect_err(log_failure("read"))?;

        let key = client
            .get_api_key(id)
            .await
            .inspect_err(log_failure("read"))?;

        Self::apply(data, &key);
        Ok(())
    }

    async fn update(&self, data: &mut ResourceData, client: &MailjetClient) -> Result<()> {
        let id = Self::parse_id(data).inspect_err(log_failure("update"))?;

        let payload = ApiKeyUpdate {
            is_active: data.get_bool("active").unwrap_or(true),
            acl: data.get_string("acl").none_if_empty(),
        };

        client
            .update_api_key(id, &payload)
            .await
            .inspect_err(log_failure("update"))?;
        trace!(id, "updated a Mailjet sub account");

        self.read(data, client).await
    }

    async fn delete(&self, _data: &mut ResourceData, _client: &MailjetClient) -> Result<()> {
        let err = Error::NotImplemented;
        log_failure("delete")(&err);
        Err(err)
    }
}
