//! # Order Client
//!
//! Appends orders to the log and moves them through their status lifecycle.
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, UserId};
use crate::order_actor::{OrderAction, OrderError};
use crate::reports::OrderFilter;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

#[derive(Clone, Debug)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .entity_error::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(customer = %params.customer_id))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Moves an order to `status` and returns it as stored afterwards.
    #[instrument(skip(self))]
    pub async fn transition(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        let order = self
            .inner
            .perform_action(id, OrderAction::Transition(status))
            .await
            .map_err(Self::map_error)?;
        info!(order_id = %order.id, status = %order.status, "Order status changed");
        Ok(order)
    }

    /// Orders matching every set field of `filter`, in placement order.
    #[instrument(skip(self))]
    pub async fn find(&self, filter: &OrderFilter) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(orders.into_iter().filter(|order| filter.matches(order)).collect())
    }

    /// A customer's order history, most recent first.
    #[instrument(skip(self))]
    pub async fn orders_for_customer(&self, customer: &UserId) -> Result<Vec<Order>, OrderError> {
        let mut orders: Vec<Order> = self
            .list()
            .await?
            .into_iter()
            .filter(|order| order.customer_id == *customer)
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(orders)
    }
}
