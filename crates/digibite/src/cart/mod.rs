//! # Cart Ledger
//!
//! The customer's chosen items and quantities before checkout.
//!
//! A [`Cart`] keeps at most one [`CartLine`] per item, in the order items were first
//! added, and never stores a zero quantity. Totals are computed on demand from the
//! lines. Stock is not consulted: putting something in the cart reserves nothing.
//!
//! The cart is plain owned data with a single mutator (the session holding it), so
//! it needs neither an actor nor a lock.
//!
//! ```rust
//! use digibite::cart::Cart;
//! use digibite::model::{Item, ItemId, TenantId};
//!
//! let nasi = Item {
//!     id: ItemId(1),
//!     tenant_id: TenantId(1),
//!     tenant_name: "Warung Bu Sri".into(),
//!     name: "Nasi Goreng".into(),
//!     description: String::new(),
//!     category: "Makanan".into(),
//!     price: 15_000,
//!     stock: 10,
//!     available: true,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add(&nasi, 1).unwrap();
//! cart.add(&nasi, 1).unwrap();
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total_price(), 30_000);
//! ```

use crate::model::{Item, ItemId, Price};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised by cart mutations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Quantity overflow for {item_id}")]
    QuantityOverflow { item_id: ItemId },
}

/// One item in the cart, with a copy of the item as it was when added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: Item,
    pub quantity: u32,
}

impl CartLine {
    /// Saturates at `Price::MAX`.
    pub fn subtotal(&self) -> Price {
        self.item.price.saturating_mul(Price::from(self.quantity))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `item`, merging with an existing line.
    ///
    /// A merge that would overflow the line's quantity is refused and leaves the
    /// cart unchanged.
    pub fn add(&mut self, item: &Item, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        match self.position(&item.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| CartError::QuantityOverflow { item_id: item.id.clone() })?;
                debug!(item_id = %item.id, quantity = line.quantity, "Cart line incremented");
            }
            None => {
                self.lines.push(CartLine {
                    item: item.clone(),
                    quantity,
                });
                debug!(item_id = %item.id, quantity, "Cart line added");
            }
        }
        Ok(())
    }

    /// Replaces the quantity of an existing line; 0 removes it.
    /// Items not in the cart are ignored.
    pub fn set_quantity(&mut self, item_id: &ItemId, quantity: u32) {
        if quantity == 0 {
            self.remove(item_id);
            return;
        }
        if let Some(index) = self.position(item_id) {
            self.lines[index].quantity = quantity;
            debug!(%item_id, quantity, "Cart line quantity set");
        }
    }

    pub fn remove(&mut self, item_id: &ItemId) {
        if let Some(index) = self.position(item_id) {
            self.lines.remove(index);
            debug!(%item_id, "Cart line removed");
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all quantities, saturating.
    pub fn total_items(&self) -> u32 {
        self.lines.iter().fold(0, |acc: u32, line| acc.saturating_add(line.quantity))
    }

    /// Sum of quantity x unit price, before the service fee. Saturates.
    pub fn total_price(&self) -> Price {
        self.lines.iter().fold(0, |acc: Price, line| acc.saturating_add(line.subtotal()))
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, item_id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item.id == *item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    fn position(&self, item_id: &ItemId) -> Option<usize> {
        self.lines.iter().position(|line| line.item.id == *item_id)
    }
}
