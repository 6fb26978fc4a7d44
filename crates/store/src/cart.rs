//! Cart operations.
//!
//! The cart is one global collection keyed by the (product, size, color)
//! triple. Quantity has no upper bound here; clamping is a presentation
//! concern.

use rust_decimal::Decimal;

use guava_core::ProductId;

use crate::error::StoreError;
use crate::events::StoreEvent;
use crate::keys;
use crate::models::CartItem;
use crate::store::Store;

impl Store {
    /// Current cart contents.
    #[must_use]
    pub fn cart(&self) -> Vec<CartItem> {
        self.read_collection(keys::CART)
    }

    /// Sum of line totals.
    #[must_use]
    pub fn cart_subtotal(&self) -> Decimal {
        self.cart().iter().map(CartItem::line_total).sum()
    }

    /// Add a line, coalescing quantities when the same (product, size,
    /// color) triple is already present.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be written back.
    pub fn add_to_cart(&self, item: CartItem) -> Result<(), StoreError> {
        let mut cart = self.cart();

        if let Some(existing) = cart
            .iter_mut()
            .find(|line| line.is_variant(&item.product_id, &item.size, &item.color))
        {
            existing.quantity += item.quantity;
        } else {
            cart.push(item);
        }

        self.write_collection(keys::CART, &cart, StoreEvent::CartChanged)
    }

    /// Overwrite the quantity of a line; zero removes the line. A triple
    /// with no matching line is a no-op and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be written back.
    pub fn update_cart_item(
        &self,
        product_id: &ProductId,
        size: &str,
        color: &str,
        quantity: u32,
    ) -> Result<(), StoreError> {
        let mut cart = self.cart();

        let Some(position) = cart
            .iter()
            .position(|line| line.is_variant(product_id, size, color))
        else {
            return Ok(());
        };

        if quantity == 0 {
            cart.remove(position);
        } else if let Some(line) = cart.get_mut(position) {
            line.quantity = quantity;
        }

        self.write_collection(keys::CART, &cart, StoreEvent::CartChanged)
    }

    /// Remove the line matching the exact (product, size, color) triple.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be written back.
    pub fn remove_from_cart(
        &self,
        product_id: &ProductId,
        size: &str,
        color: &str,
    ) -> Result<(), StoreError> {
        let mut cart = self.cart();
        cart.retain(|line| !line.is_variant(product_id, size, color));
        self.write_collection(keys::CART, &cart, StoreEvent::CartChanged)
    }

    /// Drop the whole cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    pub fn clear_cart(&self) -> Result<(), StoreError> {
        self.remove_key(keys::CART, StoreEvent::CartChanged)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(product: &str, size: &str, color: &str, quantity: u32, price: u32) -> CartItem {
        CartItem {
            product_id: ProductId::new(product),
            quantity,
            size: size.to_owned(),
            color: color.to_owned(),
            price: Decimal::from(price),
        }
    }

    #[test]
    fn test_add_same_variant_coalesces_quantities() {
        let store = Store::in_memory();
        store.add_to_cart(line("p-1", "M", "Blue", 2, 999)).unwrap();
        store.add_to_cart(line("p-1", "M", "Blue", 3, 999)).unwrap();

        let cart = store.cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.first().unwrap().quantity, 5);
    }

    #[test]
    fn test_add_different_variant_appends() {
        let store = Store::in_memory();
        store.add_to_cart(line("p-1", "M", "Blue", 1, 999)).unwrap();
        store.add_to_cart(line("p-1", "L", "Blue", 1, 999)).unwrap();
        store.add_to_cart(line("p-2", "M", "Blue", 1, 499)).unwrap();

        assert_eq!(store.cart().len(), 3);
    }

    #[test]
    fn test_update_overwrites_quantity_only() {
        let store = Store::in_memory();
        store.add_to_cart(line("p-1", "M", "Blue", 2, 999)).unwrap();
        store
            .update_cart_item(&ProductId::new("p-1"), "M", "Blue", 7)
            .unwrap();

        let cart = store.cart();
        let updated = cart.first().unwrap();
        assert_eq!(updated.quantity, 7);
        assert_eq!(updated.price, Decimal::from(999));
        assert_eq!(updated.size, "M");
    }

    #[test]
    fn test_update_to_zero_removes_line() {
        let store = Store::in_memory();
        store.add_to_cart(line("p-1", "M", "Blue", 2, 999)).unwrap();
        store
            .update_cart_item(&ProductId::new("p-1"), "M", "Blue", 0)
            .unwrap();

        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_update_unknown_variant_is_noop() {
        let store = Store::in_memory();
        store.add_to_cart(line("p-1", "M", "Blue", 2, 999)).unwrap();
        store
            .update_cart_item(&ProductId::new("p-9"), "M", "Blue", 4)
            .unwrap();

        assert_eq!(store.cart(), vec![line("p-1", "M", "Blue", 2, 999)]);
    }

    #[test]
    fn test_remove_targets_exact_triple() {
        let store = Store::in_memory();
        store.add_to_cart(line("p-1", "M", "Blue", 1, 999)).unwrap();
        store.add_to_cart(line("p-1", "L", "Blue", 1, 999)).unwrap();
        store
            .remove_from_cart(&ProductId::new("p-1"), "M", "Blue")
            .unwrap();

        assert_eq!(store.cart(), vec![line("p-1", "L", "Blue", 1, 999)]);
    }

    #[test]
    fn test_clear_cart_and_subtotal() {
        let store = Store::in_memory();
        store.add_to_cart(line("p-1", "M", "Blue", 2, 999)).unwrap();
        store.add_to_cart(line("p-2", "S", "Red", 1, 502)).unwrap();
        assert_eq!(store.cart_subtotal(), Decimal::from(2500));

        store.clear_cart().unwrap();
        assert!(store.cart().is_empty());
        assert_eq!(store.cart_subtotal(), Decimal::ZERO);
    }
}
