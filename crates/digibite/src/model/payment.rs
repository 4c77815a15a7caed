//! Payment methods as the admin configures them.

use crate::model::PaymentMethod;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for payment configurations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PaymentConfigId(pub u32);

impl From<u32> for PaymentConfigId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PaymentConfigId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pm_{}", self.0)
    }
}

/// Destination account for bank transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
}

/// One way of paying, as shown on the checkout screen.
///
/// Checkout only offers methods whose config is `active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfig {
    pub id: PaymentConfigId,
    pub name: String,
    pub code: PaymentMethod,
    pub description: String,
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<BankAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qris_image: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct PaymentConfigCreate {
    pub name: String,
    pub code: PaymentMethod,
    pub description: String,
    pub instructions: String,
    pub bank: Option<BankAccount>,
    pub qris_image: Option<String>,
}

/// Edits from the admin form. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct PaymentConfigUpdate {
    pub name: Option<String>,
    pub code: Option<PaymentMethod>,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub bank: Option<BankAccount>,
    pub qris_image: Option<String>,
}
