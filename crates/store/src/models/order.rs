//! Order record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use guava_core::{OrderId, OrderStatus, PaymentStatus, UserId};

use super::{Address, CartItem};

/// A placed order.
///
/// An order is a snapshot, not a reference: the item lines and the
/// shipping address are copied at creation time and stay frozen no matter
/// what later happens to the cart, the catalog, or the saved address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    /// Sum of line totals before any discount.
    pub total_amount: Decimal,
    /// Coupon discount applied at checkout (zero when none).
    pub discount: Decimal,
    pub delivery_charge: Decimal,
    /// `total_amount + delivery_charge - discount`.
    pub final_amount: Decimal,
    pub payment_method: String,
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,
    pub shipping_address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
