//! # Account Client
//!
//! The admin user directory: registration on sign-in, lookups by email and the
//! activate/deactivate switch.
use crate::account_actor::{AccountAction, AccountError};
use crate::model::{Account, AccountId, User};
use crate::reports::AccountFilter;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

#[derive(Clone, Debug)]
pub struct AccountClient {
    inner: ResourceClient<Account>,
}

#[async_trait]
impl ActorClient<Account> for AccountClient {
    type Error = AccountError;

    fn inner(&self) -> &ResourceClient<Account> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => AccountError::NotFound(id),
            other => other
                .entity_error::<AccountError>()
                .unwrap_or_else(|e| AccountError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl AccountClient {
    pub fn new(inner: ResourceClient<Account>) -> Self {
        Self { inner }
    }

    /// Adds `user` unless an account with the same email exists; either way
    /// returns that email's account id.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn register(&self, user: User) -> Result<AccountId, AccountError> {
        if let Some(existing) = self.find_by_email(&user.email).await? {
            debug!(account_id = %existing.id, "Already registered");
            return Ok(existing.id);
        }
        let id = self.inner.create(user).await.map_err(Self::map_error)?;
        info!(account_id = %id, "Account registered");
        Ok(id)
    }

    /// Case-insensitive email lookup.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        let accounts = self.list().await?;
        Ok(accounts.into_iter().find(|account| account.has_email(email)))
    }

    /// Returns the new `active` flag.
    #[instrument(skip(self))]
    pub async fn toggle_active(&self, id: AccountId) -> Result<bool, AccountError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, AccountAction::ToggleActive)
            .await
            .map_err(Self::map_error)
    }

    /// Accounts matching every set field of `filter`, in registration order.
    #[instrument(skip(self))]
    pub async fn find(&self, filter: &AccountFilter) -> Result<Vec<Account>, AccountError> {
        let accounts = self.list().await?;
        Ok(accounts.into_iter().filter(|account| filter.matches(account)).collect())
    }
}
