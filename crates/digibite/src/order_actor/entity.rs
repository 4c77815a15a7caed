//! [`ActorEntity`] implementation for [`Order`].
//!
//! Totals are derived here from the submitted lines, so an order's `total` is
//! always `subtotal + service_fee` whatever the caller computed.

use super::actions::OrderAction;
use super::error::OrderError;
use crate::clock::SharedClock;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, Price};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use tracing::info;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = SharedClock;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        let subtotal = params
            .items
            .iter()
            .fold(0, |acc: Price, line| acc.saturating_add(line.subtotal()));
        let notes = params
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Self {
            id,
            customer_id: params.customer_id,
            customer_name: params.customer_name,
            tenant_id: params.tenant_id,
            tenant_name: params.tenant_name,
            items: params.items,
            subtotal,
            service_fee: params.service_fee,
            total: subtotal.saturating_add(params.service_fee),
            status: OrderStatus::Pending,
            payment_method: params.payment_method,
            notes,
            created_at: params.placed_at,
            updated_at: params.placed_at,
        })
    }

    async fn on_update(&mut self, _update: (), _clock: &SharedClock) -> Result<(), Self::Error> {
        Err(OrderError::Immutable)
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        clock: &SharedClock,
    ) -> Result<Order, Self::Error> {
        match action {
            OrderAction::Transition(status) => {
                info!(order_id = %self.id, from = %self.status, to = %status, "Status transition");
                self.status = status;
                self.updated_at = clock.now();
                Ok(self.clone())
            }
        }
    }
}
