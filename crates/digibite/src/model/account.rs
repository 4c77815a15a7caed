//! Directory entries for the admin user table.

use crate::model::User;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for directory entries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub u32);

impl From<u32> for AccountId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "account_{}", self.0)
    }
}

/// A known user and whether they may still sign in.
///
/// Entries are keyed by email: the identity provider may hand out a new
/// [`UserId`](crate::model::UserId) per login, the directory keeps the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub user: User,
    pub active: bool,
}

impl Account {
    pub fn has_email(&self, email: &str) -> bool {
        self.user.email.eq_ignore_ascii_case(email.trim())
    }
}
