//! Order lifecycle.
//!
//! Orders are stored newest-first and are snapshots: the cart lines and
//! the shipping address are copied by value at placement and never track
//! later edits to their sources.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use guava_core::{NotificationId, NotificationKind, OrderId, OrderStatus, PaymentStatus, UserId};

use crate::error::StoreError;
use crate::events::StoreEvent;
use crate::keys;
use crate::models::{Address, CartItem, Notification, Order};
use crate::store::Store;

/// Free delivery above this subtotal.
const FREE_DELIVERY_THRESHOLD: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);
/// Flat delivery charge below the threshold.
const DELIVERY_CHARGE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Payment method code for cash on delivery; the one method that leaves
/// payment pending at placement.
const CASH_ON_DELIVERY: &str = "cod";

/// Everything checkout supplies to turn the cart into an order.
#[derive(Debug, Clone)]
pub struct PlaceOrder {
    pub user_id: UserId,
    /// Chosen delivery address, copied into the order by value.
    pub shipping_address: Address,
    pub payment_method: String,
    /// Optional coupon code; ignored when invalid for the cart subtotal.
    pub coupon_code: Option<String>,
}

impl Store {
    /// All orders, newest first.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.read_collection(keys::ORDERS)
    }

    /// Prepend a fully-formed order. Always a new record - never an
    /// upsert, and nothing guards against a duplicate ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written back.
    pub fn save_order(&self, order: Order) -> Result<(), StoreError> {
        let mut orders = self.orders();
        orders.insert(0, order);
        self.write_collection(keys::ORDERS, &orders, StoreEvent::OrdersChanged)
    }

    /// Overwrite an order's status and stamp its update time.
    ///
    /// Any status may replace any other; the forward-only path is
    /// advisory (see [`OrderStatus::can_advance_to`]). An unknown ID is a
    /// silent no-op that writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written back.
    pub fn update_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), StoreError> {
        let mut orders = self.orders();

        let Some(order) = orders.iter_mut().find(|order| order.id == *order_id) else {
            return Ok(());
        };

        order.order_status = status;
        order.updated_at = Utc::now();
        self.write_collection(keys::ORDERS, &orders, StoreEvent::OrdersChanged)
    }

    /// Orders owned by `user_id`, newest first.
    #[must_use]
    pub fn user_orders(&self, user_id: &UserId) -> Vec<Order> {
        self.orders()
            .into_iter()
            .filter(|order| order.user_id == *user_id)
            .collect()
    }

    /// Look up a single order.
    #[must_use]
    pub fn find_order(&self, order_id: &OrderId) -> Option<Order> {
        self.orders().into_iter().find(|order| order.id == *order_id)
    }

    /// Turn the current cart into an order.
    ///
    /// Snapshots the cart and the given address, applies the coupon
    /// against the subtotal (an invalid or inapplicable code is ignored,
    /// not an error), adds the delivery charge, records an order-placed
    /// notification for the buyer, and clears the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the touched collections cannot be
    /// written back.
    pub fn place_order(&self, request: PlaceOrder) -> Result<Order, StoreError> {
        let items = self.cart();
        let subtotal: Decimal = items.iter().map(CartItem::line_total).sum();

        let (discount, coupon_code) = match request.coupon_code {
            Some(code) => {
                let outcome = self.apply_coupon(&code, subtotal);
                if outcome.valid {
                    (outcome.discount, Some(code))
                } else {
                    (Decimal::ZERO, None)
                }
            }
            None => (Decimal::ZERO, None),
        };

        let delivery_charge = if subtotal > FREE_DELIVERY_THRESHOLD {
            Decimal::ZERO
        } else {
            DELIVERY_CHARGE
        };

        let payment_status = if request.payment_method == CASH_ON_DELIVERY {
            PaymentStatus::Pending
        } else {
            PaymentStatus::Completed
        };

        let now = Utc::now();
        let order = Order {
            id: OrderId::new(format!("ORD-{}", Uuid::new_v4().simple())),
            user_id: request.user_id.clone(),
            items,
            total_amount: subtotal,
            discount,
            delivery_charge,
            final_amount: subtotal + delivery_charge - discount,
            payment_method: request.payment_method,
            payment_status,
            order_status: OrderStatus::Pending,
            shipping_address: request.shipping_address,
            coupon_code,
            created_at: now,
            updated_at: now,
        };

        self.save_order(order.clone())?;
        self.add_notification(Notification {
            id: NotificationId::generate(),
            user_id: request.user_id,
            title: "Order Placed Successfully".to_owned(),
            message: format!("Your order {} has been placed successfully.", order.id),
            kind: NotificationKind::Order,
            read: false,
            created_at: now,
        })?;
        self.clear_cart()?;

        Ok(order)
    }
}
