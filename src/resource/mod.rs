//! Resources managed by the provider
//!
//! A [`Resource`] declares its schema and implements the four lifecycle
//! handlers. Handlers read and write attribute values through
//! [`ResourceData`] and talk to Mailjet through the shared client handle
//! produced by provider configuration.

mod data;
mod subaccount;

pub use data::{ResourceData, ResourceState};
pub use subaccount::{SubaccountResource, SUBACCOUNT_TYPE};

use crate::error::Result;
use crate::mailjet::MailjetClient;
use crate::schema::Schema;
use async_trait::async_trait;

/// Lifecycle handlers of a managed resource
#[async_trait]
pub trait Resource: Send + Sync {
    /// Resource type name, e.g. `mailjet_subaccount`
    fn type_name(&self) -> &'static str;

    /// Attribute schema
    fn schema(&self) -> Schema;

    /// Create the remote object and record its identity in `data`
    async fn create(&self, data: &mut ResourceData, client: &MailjetClient) -> Result<()>;

    /// Refresh `data` from the remote object
    async fn read(&self, data: &mut ResourceData, client: &MailjetClient) -> Result<()>;

    /// Push changed attributes to the remote object
    async fn update(&self, data: &mut ResourceData, client: &MailjetClient) -> Result<()>;

    /// Destroy the remote object
    async fn delete(&self, data: &mut ResourceData, client: &MailjetClient) -> Result<()>;

    /// Adopt an existing remote object by ID
    async fn import(&self, id: &str, client: &MailjetClient) -> Result<ResourceData> {
        let mut data = ResourceData::default();
        data.set_id(id);
        self.read(&mut data, client).await?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests;
