//! [`ActorEntity`] implementation for [`Account`].

use super::actions::AccountAction;
use super::error::AccountError;
use crate::model::{Account, AccountId, User};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use tracing::info;

#[async_trait]
impl ActorEntity for Account {
    type Id = AccountId;
    type Create = User;
    type Update = ();
    type Action = AccountAction;
    type ActionResult = bool;
    type Context = ();
    type Error = AccountError;

    /// New accounts start active.
    fn from_create_params(id: AccountId, mut user: User) -> Result<Self, Self::Error> {
        user.name = user.name.trim().to_string();
        if user.name.is_empty() {
            return Err(AccountError::EmptyName);
        }
        user.email = user.email.trim().to_string();
        let valid = user
            .email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !valid {
            return Err(AccountError::InvalidEmail(user.email));
        }
        Ok(Self { id, user, active: true })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Err(AccountError::ReadOnly)
    }

    async fn handle_action(&mut self, action: AccountAction, _ctx: &()) -> Result<bool, Self::Error> {
        match action {
            AccountAction::ToggleActive => {
                self.active = !self.active;
                info!(account_id = %self.id, email = %self.user.email, active = self.active, "Account toggled");
                Ok(self.active)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{UserId, UserRole};
    use chrono::Utc;

    fn user(name: &str, email: &str) -> User {
        User {
            id: UserId("u-1".to_string()),
            name: name.to_string(),
            email: email.to_string(),
            role: UserRole::User,
            avatar: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_create_validates_name_and_email() {
        assert_eq!(
            Account::from_create_params(AccountId(1), user("  ", "john@student.com")).unwrap_err(),
            AccountError::EmptyName
        );
        for email in ["john", "@student.com", "john@"] {
            assert_eq!(
                Account::from_create_params(AccountId(1), user("John", email)).unwrap_err(),
                AccountError::InvalidEmail(email.to_string())
            );
        }

        let account = Account::from_create_params(AccountId(1), user("John Doe", " john@student.com ")).unwrap();
        assert!(account.active);
        assert!(account.has_email("JOHN@student.com"));
    }

    #[tokio::test]
    async fn test_toggle_and_read_only() {
        let mut account = Account::from_create_params(AccountId(1), user("Jane", "jane@student.com")).unwrap();
        assert!(!account.handle_action(AccountAction::ToggleActive, &()).await.unwrap());
        assert_eq!(account.on_update((), &()).await, Err(AccountError::ReadOnly));
        assert!(!account.active);
    }
}
