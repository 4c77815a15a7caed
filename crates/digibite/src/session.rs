//! A logged-in customer's shopping context.
//!
//! [`ShopSession`] owns the cart outright and is passed around by whoever drives
//! the customer's flow. Adding goes through the catalog so only known, available
//! items reach the cart; quantities and removal are purely local.

use crate::cart::{Cart, CartError};
use crate::catalog_actor::CatalogError;
use crate::checkout::{Checkout, CheckoutError, Quote};
use crate::clients::CatalogClient;
use crate::model::{ItemId, Order, PaymentMethod, User};
use resource_actor::ActorClient;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown item: {0}")]
    UnknownItem(ItemId),

    #[error("Item is not available: {0}")]
    Unavailable(ItemId),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

pub struct ShopSession {
    customer: User,
    cart: Cart,
    catalog: CatalogClient,
    checkout: Checkout,
}

impl ShopSession {
    /// Starts with an empty cart.
    pub fn new(customer: User, catalog: CatalogClient, checkout: Checkout) -> Self {
        Self {
            customer,
            cart: Cart::new(),
            catalog,
            checkout,
        }
    }

    pub fn customer(&self) -> &User {
        &self.customer
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds the catalog's current copy of the item.
    #[instrument(skip(self), fields(customer = %self.customer.id))]
    pub async fn add_to_cart(&mut self, item_id: ItemId, quantity: u32) -> Result<(), SessionError> {
        let item = self
            .catalog
            .get(item_id.clone())
            .await?
            .ok_or(SessionError::UnknownItem(item_id))?;
        if !item.available {
            return Err(SessionError::Unavailable(item.id));
        }
        self.cart.add(&item, quantity)?;
        Ok(())
    }

    /// 0 removes the line.
    pub fn update_quantity(&mut self, item_id: &ItemId, quantity: u32) {
        self.cart.set_quantity(item_id, quantity);
    }

    pub fn remove_from_cart(&mut self, item_id: &ItemId) {
        self.cart.remove(item_id);
    }

    pub fn quote(&self) -> Quote {
        self.checkout.quote(&self.cart)
    }

    #[instrument(skip(self, notes), fields(customer = %self.customer.id))]
    pub async fn checkout(&mut self, payment_method: PaymentMethod, notes: Option<String>) -> Result<Order, SessionError> {
        let order = self
            .checkout
            .confirm_payment(&mut self.cart, &self.customer, payment_method, notes)
            .await?;
        info!(order_id = %order.id, "Checkout complete");
        Ok(order)
    }
}
