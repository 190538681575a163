//! Custom actions for the Order actor.

use crate::model::OrderStatus;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order along its workflow. Delivering restocks the catalog.
    ///
    /// # Errors
    /// `InvalidTransition` when the workflow does not allow the change.
    UpdateStatus(OrderStatus),
}
