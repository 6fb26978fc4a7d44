//! Guava Store - local key-value persistence facade for the shop.
//!
//! Everything the storefront and admin console "persist" lives in a named
//! key-value text store, the contract a browser's local storage offers:
//! each collection (users, cart, orders, addresses, wishlists,
//! notifications, products, coupons) is one JSON blob under one key, read
//! and rewritten wholesale on every mutation.
//!
//! # Architecture
//!
//! - [`Store`] owns a pluggable [`backend::StorageBackend`] (in-memory or a
//!   JSON document on disk) and a subscriber registry. There is no ambient
//!   state: per-user collections take the [`guava_core::UserId`]
//!   explicitly, and the login session is a record under its own key.
//! - Reads never fail. An absent key is an empty collection, an unreadable
//!   one is logged and treated as absent, and the product/coupon
//!   collections fall back to the bundled [`catalog`].
//! - Writes return [`StoreError`] only for backend I/O or serialization;
//!   domain rejections (invalid coupon, unknown order ID, wrong password)
//!   are ordinary return values.
//! - Every mutation synchronously notifies subscribers with the
//!   [`StoreEvent`] naming the changed aspect; consumers re-query.
//!
//! # Example
//!
//! ```
//! use guava_store::{Store, models::CartItem};
//! use guava_core::ProductId;
//! use rust_decimal::Decimal;
//!
//! let store = Store::in_memory();
//! store.add_to_cart(CartItem {
//!     product_id: ProductId::new("prod-003"),
//!     quantity: 2,
//!     size: "M".to_owned(),
//!     color: "Black".to_owned(),
//!     price: Decimal::from(899),
//! })?;
//! assert_eq!(store.cart_subtotal(), Decimal::from(1798));
//! # Ok::<(), guava_store::StoreError>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod catalog;
pub mod models;

mod addresses;
mod cart;
mod collection;
mod coupons;
mod error;
mod events;
mod keys;
mod notifications;
mod orders;
mod products;
mod store;
mod users;
mod wishlist;

pub use coupons::CouponOutcome;
pub use error::StoreError;
pub use events::{StoreEvent, Subscription};
pub use orders::PlaceOrder;
pub use store::Store;
