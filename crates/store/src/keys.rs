//! Storage key names and per-user scoping.
//!
//! Global collections live under fixed keys; per-user collections embed the
//! owning user's ID in the key. Key isolation is the only thing separating
//! one user's addresses, wishlist, and notifications from another's, so the
//! builders here are the single place these strings are assembled.

use guava_core::UserId;

/// Shared shopping cart (guest cart; one per store).
pub(crate) const CART: &str = "cart";
/// All orders, newest first.
pub(crate) const ORDERS: &str = "orders";
/// Product catalog override; absent means the bundled catalog.
pub(crate) const PRODUCTS: &str = "products";
/// Coupon collection; absent means the bundled coupons.
pub(crate) const COUPONS: &str = "coupons";
/// Registered users.
pub(crate) const USERS: &str = "users";
/// The logged-in user record.
pub(crate) const CURRENT_USER: &str = "current-user";

/// Key for a user's saved addresses.
pub(crate) fn addresses(user_id: &UserId) -> String {
    format!("addresses:{user_id}")
}

/// Key for a user's wishlist.
pub(crate) fn wishlist(user_id: &UserId) -> String {
    format!("wishlist:{user_id}")
}

/// Key for a user's notifications.
pub(crate) fn notifications(user_id: &UserId) -> String {
    format!("notifications:{user_id}")
}
