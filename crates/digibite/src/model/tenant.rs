use crate::model::UserId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Tenants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TenantId(pub u32);

impl From<u32> for TenantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tenant_{}", self.0)
    }
}

/// A food vendor operating a stall in the food court.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    pub description: String,
    pub owner_id: UserId,
    pub owner_name: String,
    pub category: String,
    pub rating: f32,
    pub active: bool,
}

/// Payload for registering a tenant.
#[derive(Debug, Clone)]
pub struct TenantCreate {
    pub name: String,
    pub description: String,
    pub owner_id: UserId,
    pub owner_name: String,
    pub category: String,
    pub rating: f32,
}

/// Profile edits. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TenantUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}
