//! # Payment Client
//!
//! Admin management of payment methods, plus the lookup checkout uses to decide
//! whether a method is currently accepted.
use crate::clients::matches_query;
use crate::model::{PaymentConfig, PaymentConfigCreate, PaymentConfigId, PaymentConfigUpdate, PaymentMethod};
use crate::payment_actor::{PaymentAction, PaymentError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone, Debug)]
pub struct PaymentClient {
    inner: ResourceClient<PaymentConfig>,
}

#[async_trait]
impl ActorClient<PaymentConfig> for PaymentClient {
    type Error = PaymentError;

    fn inner(&self) -> &ResourceClient<PaymentConfig> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => PaymentError::NotFound(id),
            other => other
                .entity_error::<PaymentError>()
                .unwrap_or_else(|e| PaymentError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl PaymentClient {
    pub fn new(inner: ResourceClient<PaymentConfig>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_method(&self, params: PaymentConfigCreate) -> Result<PaymentConfigId, PaymentError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_method(
        &self,
        id: PaymentConfigId,
        update: PaymentConfigUpdate,
    ) -> Result<PaymentConfig, PaymentError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Returns the new `active` flag.
    #[instrument(skip(self))]
    pub async fn toggle_active(&self, id: PaymentConfigId) -> Result<bool, PaymentError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, PaymentAction::ToggleActive)
            .await
            .map_err(Self::map_error)
    }

    /// What the checkout screen offers.
    #[instrument(skip(self))]
    pub async fn active_methods(&self) -> Result<Vec<PaymentConfig>, PaymentError> {
        let methods = self.list().await?;
        Ok(methods.into_iter().filter(|m| m.active).collect())
    }

    /// True when at least one active config carries `code`.
    #[instrument(skip(self))]
    pub async fn accepts(&self, code: PaymentMethod) -> Result<bool, PaymentError> {
        let methods = self.list().await?;
        Ok(methods.iter().any(|m| m.active && m.code == code))
    }

    /// Methods whose name or description contains `query`.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<PaymentConfig>, PaymentError> {
        let methods = self.list().await?;
        Ok(methods
            .into_iter()
            .filter(|m| matches_query(query, &[m.name.as_str(), m.description.as_str()]))
            .collect())
    }
}
