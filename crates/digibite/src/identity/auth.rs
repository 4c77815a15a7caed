//! Persisted login state.
//!
//! Stored as JSON under one key:
//!
//! ```json
//! {"state":{"user":{"id":"…","name":"rina",…},"isAuthenticated":true},"version":0}
//! ```

use super::{IdentityError, IdentityProvider, KeyValueStore, StorageError};
use crate::model::{User, UserRole};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Version written alongside the state. Bump when the shape changes.
pub const STATE_VERSION: u32 = 0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct Persisted<S> {
    state: S,
    version: u32,
}

/// The current user, kept in sync with a [`KeyValueStore`].
pub struct Auth {
    provider: Arc<dyn IdentityProvider>,
    store: Arc<dyn KeyValueStore>,
    key: String,
    state: AuthState,
}

impl Auth {
    /// Loads whatever state was stored under `key`; logged out if nothing was.
    pub async fn restore(
        provider: Arc<dyn IdentityProvider>,
        store: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        let key = key.into();
        let state = match store.get(&key).await? {
            Some(raw) => {
                let persisted: Persisted<AuthState> = serde_json::from_str(&raw).map_err(StorageError::from)?;
                if persisted.version != STATE_VERSION {
                    warn!(version = persisted.version, "Stored auth state has a different version");
                }
                persisted.state
            }
            None => AuthState::default(),
        };
        info!(%key, authenticated = state.is_authenticated, "Auth state restored");

        Ok(Self {
            provider,
            store,
            key,
            state,
        })
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    /// `Ok(false)` when the provider refuses or fails; the previous state is kept.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str, role: UserRole) -> Result<bool, IdentityError> {
        let user = match self.provider.login(email, password, role).await {
            Ok(Some(user)) => user,
            Ok(None) => return Ok(false),
            Err(e) => {
                warn!(error = %e, "Login failed");
                return Ok(false);
            }
        };
        info!(user_id = %user.id, role = %user.role, "Logged in");
        self.set_user(user).await?;
        Ok(true)
    }

    pub async fn logout(&mut self) -> Result<(), IdentityError> {
        self.provider.logout().await?;
        self.state = AuthState::default();
        self.persist().await?;
        info!("Logged out");
        Ok(())
    }

    /// Replaces the current user and marks the session authenticated.
    pub async fn set_user(&mut self, user: User) -> Result<(), IdentityError> {
        self.state = AuthState {
            user: Some(user),
            is_authenticated: true,
        };
        self.persist().await
    }

    async fn persist(&self) -> Result<(), IdentityError> {
        let persisted = Persisted {
            state: &self.state,
            version: STATE_VERSION,
        };
        let raw = serde_json::to_string(&persisted).map_err(StorageError::from)?;
        self.store.set(&self.key, raw).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{MemoryStore, MockIdentity};
    use crate::clock::ManualClock;
    use chrono::Utc;
    use std::time::Duration;

    fn provider() -> Arc<dyn IdentityProvider> {
        Arc::new(MockIdentity::new(Duration::ZERO, Arc::new(ManualClock::new(Utc::now()))))
    }

    #[tokio::test]
    async fn test_login_persists_wrapped_state() {
        let store = Arc::new(MemoryStore::new());
        let mut auth = Auth::restore(provider(), store.clone(), "auth-storage").await.unwrap();
        assert!(!auth.is_authenticated());

        assert!(auth.login("rina@kampus.ac.id", "x", UserRole::User).await.unwrap());

        let raw = store.get("auth-storage").await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["version"], 0);
        assert_eq!(json["state"]["isAuthenticated"], true);
        assert_eq!(json["state"]["user"]["name"], "rina");
        assert_eq!(json["state"]["user"]["role"], "user");
    }

    #[tokio::test]
    async fn test_restore_then_logout() {
        let store = Arc::new(MemoryStore::new());
        let mut first = Auth::restore(provider(), store.clone(), "auth-storage").await.unwrap();
        first.login("admin@digibite.id", "x", UserRole::Admin).await.unwrap();
        let user = first.user().cloned();

        let mut second = Auth::restore(provider(), store.clone(), "auth-storage").await.unwrap();
        assert!(second.is_authenticated());
        assert_eq!(second.user().cloned(), user);

        second.logout().await.unwrap();
        let third = Auth::restore(provider(), store, "auth-storage").await.unwrap();
        assert_eq!(third.state(), &AuthState::default());
    }

    #[tokio::test]
    async fn test_corrupt_state_is_a_storage_error() {
        let store = Arc::new(MemoryStore::new());
        store.set("auth-storage", "not json".to_string()).await.unwrap();

        let result = Auth::restore(provider(), store, "auth-storage").await;
        assert!(matches!(result, Err(IdentityError::Storage(StorageError::Json(_)))));
    }

    struct Refusing;

    #[async_trait::async_trait]
    impl IdentityProvider for Refusing {
        async fn login(&self, _: &str, _: &str, _: UserRole) -> Result<Option<User>, IdentityError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_refused_login_is_false() {
        let mut auth = Auth::restore(Arc::new(Refusing), Arc::new(MemoryStore::new()), "auth-storage")
            .await
            .unwrap();
        assert!(!auth.login("x@y.z", "bad", UserRole::User).await.unwrap());
        assert!(auth.user().is_none());
    }
}
