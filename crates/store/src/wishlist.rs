//! Per-user wishlist.

use guava_core::{ProductId, UserId};

use crate::collection::toggle;
use crate::error::StoreError;
use crate::events::StoreEvent;
use crate::keys;
use crate::store::Store;

impl Store {
    /// Product IDs on the user's wishlist, in insertion order.
    #[must_use]
    pub fn wishlist(&self, user_id: &UserId) -> Vec<ProductId> {
        self.read_collection(&keys::wishlist(user_id))
    }

    /// Add the product if absent, remove it if present.
    ///
    /// Toggling twice restores the original membership.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written back.
    pub fn toggle_wishlist(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<(), StoreError> {
        let mut wishlist = self.wishlist(user_id);
        toggle(&mut wishlist, product_id.clone());
        self.write_collection(
            &keys::wishlist(user_id),
            &wishlist,
            StoreEvent::WishlistChanged,
        )
    }

    /// Whether the product is on the user's wishlist.
    #[must_use]
    pub fn is_wishlisted(&self, user_id: &UserId, product_id: &ProductId) -> bool {
        self.wishlist(user_id).contains(product_id)
    }
}
