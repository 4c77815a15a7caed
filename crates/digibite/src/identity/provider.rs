use super::IdentityError;
use crate::clock::SharedClock;
use crate::model::{User, UserId, UserRole};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Authenticates users. `Ok(None)` means the credentials were refused.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn login(&self, email: &str, password: &str, role: UserRole) -> Result<Option<User>, IdentityError>;

    async fn logout(&self) -> Result<(), IdentityError> {
        Ok(())
    }
}

/// Accepts any credentials after a fixed delay.
///
/// The user is named after the local part of the email and gets a fresh random id
/// on every login.
pub struct MockIdentity {
    delay: Duration,
    clock: SharedClock,
}

impl MockIdentity {
    pub fn new(delay: Duration, clock: SharedClock) -> Self {
        Self { delay, clock }
    }
}

#[async_trait]
impl IdentityProvider for MockIdentity {
    #[instrument(skip(self, _password))]
    async fn login(&self, email: &str, _password: &str, role: UserRole) -> Result<Option<User>, IdentityError> {
        tokio::time::sleep(self.delay).await;

        let name = email.split('@').next().unwrap_or_default().to_string();
        let user = User {
            id: UserId(uuid::Uuid::new_v4().simple().to_string()),
            name,
            email: email.to_string(),
            role,
            avatar: Some(format!("https://api.dicebear.com/7.x/avataaars/svg?seed={email}")),
            created_at: self.clock.now(),
        };
        debug!(user_id = %user.id, "Mock login accepted");
        Ok(Some(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_mock_login_waits_then_builds_user() {
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
        let provider = MockIdentity::new(Duration::from_millis(500), Arc::new(ManualClock::new(now)));

        let started = tokio::time::Instant::now();
        let user = provider
            .login("budi.santoso@kampus.ac.id", "rahasia", UserRole::Seller)
            .await
            .unwrap()
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(500));
        assert_eq!(user.name, "budi.santoso");
        assert_eq!(user.role, UserRole::Seller);
        assert_eq!(user.created_at, now);
        assert!(user.avatar.unwrap().ends_with("seed=budi.santoso@kampus.ac.id"));
    }

    #[tokio::test]
    async fn test_each_login_gets_a_new_id() {
        let provider = MockIdentity::new(Duration::ZERO, Arc::new(ManualClock::new(Utc::now())));
        let a = provider.login("a@x.id", "", UserRole::User).await.unwrap().unwrap();
        let b = provider.login("a@x.id", "", UserRole::User).await.unwrap().unwrap();
        assert_ne!(a.id, b.id);
    }
}
