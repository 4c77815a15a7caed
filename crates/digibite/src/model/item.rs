use crate::model::TenantId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Amount in whole Rupiah.
pub type Price = u64;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// A sellable menu entry owned by a tenant.
///
/// `stock` is informational: adding to a cart never reserves or decrements it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub tenant_id: TenantId,
    pub tenant_name: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Price,
    pub stock: u32,
    pub available: bool,
}

/// Payload for adding an item to the catalog. New items start available.
#[derive(Debug, Clone)]
pub struct ItemCreate {
    pub tenant_id: TenantId,
    pub tenant_name: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Price,
    pub stock: u32,
}

/// Seller edits. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<Price>,
    pub stock: Option<u32>,
}
