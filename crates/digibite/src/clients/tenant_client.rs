//! # Tenant Client
use crate::clients::matches_query;
use crate::model::{Tenant, TenantCreate, TenantId, TenantUpdate};
use crate::tenant_actor::{TenantAction, TenantError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone, Debug)]
pub struct TenantClient {
    inner: ResourceClient<Tenant>,
}

#[async_trait]
impl ActorClient<Tenant> for TenantClient {
    type Error = TenantError;

    fn inner(&self) -> &ResourceClient<Tenant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => TenantError::NotFound(id),
            other => other
                .entity_error::<TenantError>()
                .unwrap_or_else(|e| TenantError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl TenantClient {
    pub fn new(inner: ResourceClient<Tenant>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_tenant(&self, params: TenantCreate) -> Result<TenantId, TenantError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_tenant(&self, id: TenantId, update: TenantUpdate) -> Result<Tenant, TenantError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Returns the new `active` flag.
    #[instrument(skip(self))]
    pub async fn toggle_active(&self, id: TenantId) -> Result<bool, TenantError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, TenantAction::ToggleActive)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn active_tenants(&self) -> Result<Vec<Tenant>, TenantError> {
        let tenants = self.list().await?;
        Ok(tenants.into_iter().filter(|t| t.active).collect())
    }

    /// Tenants whose name or owner name contains `query`.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Tenant>, TenantError> {
        let tenants = self.list().await?;
        Ok(tenants
            .into_iter()
            .filter(|t| matches_query(query, &[t.name.as_str(), t.owner_name.as_str()]))
            .collect())
    }
}
