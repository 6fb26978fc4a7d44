//! Record types persisted by the store.
//!
//! Every record serializes as JSON with camelCase field names; optional
//! fields default on read so records written by older revisions still
//! load. Identity is a string ID from `guava-core` except for cart lines,
//! whose identity is the (product, size, color) triple.

pub mod address;
pub mod cart;
pub mod coupon;
pub mod notification;
pub mod order;
pub mod product;
pub mod user;

pub use address::Address;
pub use cart::CartItem;
pub use coupon::Coupon;
pub use notification::Notification;
pub use order::Order;
pub use product::Product;
pub use user::User;
