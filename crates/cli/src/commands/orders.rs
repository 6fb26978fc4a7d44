//! Order inspection and lifecycle commands.

use thiserror::Error;
use tracing::{info, warn};

use guava_core::{OrderId, OrderStatus, UserId};
use guava_store::{Store, StoreError};

/// Errors that can occur while driving orders.
#[derive(Debug, Error)]
pub enum OrdersError {
    /// The status string is not a known order status.
    #[error("{0}")]
    InvalidStatus(String),

    /// No order exists with the given ID.
    #[error("No order with ID {0}")]
    NotFound(OrderId),

    /// The store could not be written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// List orders, newest first, optionally filtered to one user.
pub fn list(store: &Store, user: Option<&str>) {
    let orders = match user {
        Some(user_id) => store.user_orders(&UserId::new(user_id)),
        None => store.orders(),
    };

    if orders.is_empty() {
        info!("No orders found");
        return;
    }

    for order in orders {
        info!(
            "{}  {}  {}/{}  ₹{}",
            order.id,
            order.created_at.format("%Y-%m-%d"),
            order.order_status,
            order.payment_status,
            order.final_amount
        );
    }
}

/// Overwrite an order's status.
///
/// Warns (but proceeds) when the move is not on the forward-only path -
/// the admin console has the same latitude.
///
/// # Errors
///
/// Returns an error if the status string is unknown, the order does not
/// exist, or the store cannot be written.
pub fn set_status(store: &Store, order_id: &str, status: &str) -> Result<(), OrdersError> {
    let status: OrderStatus = status.parse().map_err(OrdersError::InvalidStatus)?;
    let order_id = OrderId::new(order_id);

    let Some(order) = store.find_order(&order_id) else {
        return Err(OrdersError::NotFound(order_id));
    };

    if !order.order_status.can_advance_to(status) {
        warn!(
            "{} -> {} is not a forward transition; setting anyway",
            order.order_status, status
        );
    }

    store.update_order_status(&order_id, status)?;
    info!("Order {order_id} is now {status}");
    Ok(())
}
