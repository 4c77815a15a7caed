//! # Checkout
//!
//! Turns the cart into an order.
//!
//! [`Checkout::confirm_payment`] waits out a fixed payment-confirmation delay,
//! appends the order to the log and only then clears the cart. Every step before
//! the append is free of side effects, so dropping the future during the wait
//! leaves the cart as it was and logs nothing. The append is the last call that
//! can fail; the returned order is built from the same payload the log accepted,
//! without a second round trip. There is no decline path, but a method the admin
//! has switched off is refused before the wait.
//!
//! ```rust,ignore
//! let quote = checkout.quote(&cart);
//! let order = checkout
//!     .confirm_payment(&mut cart, &customer, PaymentMethod::Qris, None)
//!     .await?;
//! assert_eq!(order.total, quote.total);
//! assert!(cart.is_empty());
//! ```

use crate::cart::Cart;
use crate::clients::{OrderClient, PaymentClient};
use crate::clock::SharedClock;
use crate::config::Config;
use crate::model::{Order, OrderCreate, PaymentConfig, PaymentMethod, Price, User};
use crate::order_actor::OrderError;
use crate::payment_actor::PaymentError;
use resource_actor::ActorEntity;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Payment method is not accepted: {0}")]
    PaymentUnavailable(PaymentMethod),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// The checkout summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub subtotal: Price,
    pub service_fee: Price,
    pub total: Price,
}

#[derive(Clone)]
pub struct Checkout {
    orders: OrderClient,
    payments: PaymentClient,
    clock: SharedClock,
    service_fee: Price,
    delay: Duration,
}

impl Checkout {
    pub fn new(orders: OrderClient, payments: PaymentClient, clock: SharedClock, config: &Config) -> Self {
        Self {
            orders,
            payments,
            clock,
            service_fee: config.service_fee,
            delay: config.checkout_delay,
        }
    }

    pub fn service_fee(&self) -> Price {
        self.service_fee
    }

    /// The methods the checkout screen offers.
    pub async fn payment_options(&self) -> Result<Vec<PaymentConfig>, CheckoutError> {
        Ok(self.payments.active_methods().await?)
    }

    /// What the customer would pay for the cart right now.
    pub fn quote(&self, cart: &Cart) -> Quote {
        let subtotal = cart.total_price();
        Quote {
            subtotal,
            service_fee: self.service_fee,
            total: subtotal.saturating_add(self.service_fee),
        }
    }

    /// Places an order for everything in `cart` and empties it.
    ///
    /// The order is attributed to the tenant of the first cart line. Blank notes
    /// are dropped. `payment_method` must have an active config.
    #[instrument(skip(self, cart, customer), fields(customer = %customer.id, lines = cart.len()))]
    pub async fn confirm_payment(
        &self,
        cart: &mut Cart,
        customer: &User,
        payment_method: PaymentMethod,
        notes: Option<String>,
    ) -> Result<Order, CheckoutError> {
        let Some(first) = cart.lines().first() else {
            return Err(CheckoutError::EmptyCart);
        };
        let (tenant_id, tenant_name) = (first.item.tenant_id.clone(), first.item.tenant_name.clone());

        if !self.payments.accepts(payment_method).await? {
            return Err(CheckoutError::PaymentUnavailable(payment_method));
        }

        tokio::time::sleep(self.delay).await;

        let params = OrderCreate {
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            tenant_id,
            tenant_name,
            items: cart.lines().to_vec(),
            service_fee: self.service_fee,
            payment_method,
            notes,
            placed_at: self.clock.now(),
        };
        let id = self.orders.create_order(params.clone()).await?;
        // Commit point: nothing after the append may fail.
        cart.clear();
        let order = Order::from_create_params(id, params)?;
        info!(order_id = %order.id, total = order.total, method = %order.payment_method, "Order placed");
        Ok(order)
    }
}
