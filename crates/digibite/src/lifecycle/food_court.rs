use crate::account_actor::AccountError;
use crate::checkout::Checkout;
use crate::clients::{AccountClient, CatalogClient, OrderClient, PaymentClient, TenantClient};
use crate::clock::{SharedClock, SystemClock};
use crate::config::Config;
use crate::identity::{Auth, FileStore, IdentityError, KeyValueStore, MemoryStore, MockIdentity};
use crate::model::{User, UserRole};
use crate::session::ShopSession;
use crate::{account_actor, catalog_actor, order_actor, payment_actor, tenant_actor};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, instrument, warn};

#[derive(Debug, Error)]
pub enum SignInError {
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Account(#[from] AccountError),
}

/// The running system: one actor per resource plus the session store.
///
/// ```ignore
/// let court = FoodCourt::new(Config::from_env());
/// court.seed().await?;
///
/// let mut auth = court.auth().await?;
/// court.sign_in(&mut auth, "rina@kampus.ac.id", "rahasia", UserRole::User).await?;
/// let mut shop = court.shop(auth.user().cloned().unwrap());
/// // ...
/// drop(shop);
/// court.shutdown().await?;
/// ```
pub struct FoodCourt {
    pub config: Config,
    pub clock: SharedClock,
    pub catalog: CatalogClient,
    pub tenants: TenantClient,
    pub orders: OrderClient,
    pub payments: PaymentClient,
    pub accounts: AccountClient,
    store: Arc<dyn KeyValueStore>,
    handles: Vec<JoinHandle<()>>,
}

impl FoodCourt {
    /// Starts every actor on the wall clock. Must be called inside a Tokio runtime.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: SharedClock) -> Self {
        let (catalog_actor, catalog) = catalog_actor::new(config.mailbox_size);
        let (tenant_actor, tenants) = tenant_actor::new(config.mailbox_size);
        let (order_actor, orders) = order_actor::new(config.mailbox_size);
        let (payment_actor, payments) = payment_actor::new(config.mailbox_size);
        let (account_actor, accounts) = account_actor::new(config.mailbox_size);

        let handles = vec![
            tokio::spawn(catalog_actor.run(())),
            tokio::spawn(tenant_actor.run(())),
            tokio::spawn(order_actor.run(clock.clone())),
            tokio::spawn(payment_actor.run(())),
            tokio::spawn(account_actor.run(())),
        ];

        let store: Arc<dyn KeyValueStore> = match &config.session_dir {
            Some(dir) => Arc::new(FileStore::new(dir.clone())),
            None => Arc::new(MemoryStore::new()),
        };
        info!(
            service_fee = config.service_fee,
            persistent_session = config.session_dir.is_some(),
            "Food court started"
        );

        Self {
            config,
            clock,
            catalog,
            tenants,
            orders,
            payments,
            accounts,
            store,
            handles,
        }
    }

    /// Restores the persisted login state through the mock identity provider.
    pub async fn auth(&self) -> Result<Auth, IdentityError> {
        let provider = Arc::new(MockIdentity::new(self.config.login_delay, self.clock.clone()));
        Auth::restore(provider, self.store.clone(), self.config.session_key.clone()).await
    }

    /// Logs in through `auth` unless the directory has the email deactivated.
    /// A successful login registers the user in the directory.
    ///
    /// `Ok(false)` when the login is refused; `auth` is then left as it was.
    #[instrument(skip(self, auth, password))]
    pub async fn sign_in(
        &self,
        auth: &mut Auth,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<bool, SignInError> {
        if let Some(account) = self.accounts.find_by_email(email).await? {
            if !account.active {
                warn!(account_id = %account.id, "Sign-in refused for deactivated account");
                return Ok(false);
            }
        }
        if !auth.login(email, password, role).await? {
            return Ok(false);
        }
        if let Some(user) = auth.user() {
            self.accounts.register(user.clone()).await?;
        }
        Ok(true)
    }

    pub fn checkout(&self) -> Checkout {
        Checkout::new(self.orders.clone(), self.payments.clone(), self.clock.clone(), &self.config)
    }

    /// A fresh shopping session with an empty cart.
    pub fn shop(&self, customer: User) -> ShopSession {
        ShopSession::new(customer, self.catalog.clone(), self.checkout())
    }

    /// Closes every mailbox and waits for the actors to finish.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down food court");
        drop(self.catalog);
        drop(self.tenants);
        drop(self.orders);
        drop(self.payments);
        drop(self.accounts);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }
        info!("Shutdown complete");
        Ok(())
    }
}
