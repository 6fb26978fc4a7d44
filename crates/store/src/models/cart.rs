//! Cart line record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use guava_core::ProductId;

/// One line of the shopping cart.
///
/// Identity is the (product, size, color) triple: the same product in two
/// sizes is two lines, and adding a triple that already exists coalesces
/// quantities instead of duplicating the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub size: String,
    pub color: String,
    /// Unit price captured when the line was added.
    pub price: Decimal,
}

impl CartItem {
    /// Whether this line is the given (product, size, color) triple.
    #[must_use]
    pub fn is_variant(&self, product_id: &ProductId, size: &str, color: &str) -> bool {
        self.product_id == *product_id && self.size == size && self.color == color
    }

    /// Price of the whole line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
