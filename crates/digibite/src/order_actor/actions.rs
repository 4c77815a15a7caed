//! Custom actions for the order actor.

use crate::model::OrderStatus;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to the given status and answers with the updated order.
    Transition(OrderStatus),
}
