//! Integration tests for Guava.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p guava-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - cart to coupon to placed order, end to end
//! - `order_lifecycle` - status updates and per-user order queries
//! - `persistence` - the file-backed document across reopen
//!
//! This crate's library is the shared fixture set: record builders with
//! sensible defaults so each test names only the fields it cares about.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::Utc;
use rust_decimal::Decimal;

use guava_core::{AddressId, Email, ProductId, UserId, UserRole};
use guava_store::models::{Address, CartItem, User};

/// A customer record with fixture defaults.
///
/// # Panics
///
/// Panics if `email` is not a valid address (fixture misuse).
#[must_use]
pub fn customer(id: &str, email: &str, phone: &str) -> User {
    User {
        id: UserId::new(id),
        name: "Asha Rao".to_owned(),
        email: Email::parse(email).expect("fixture email must parse"),
        phone: phone.to_owned(),
        password: "hunter2".to_owned(),
        role: UserRole::Customer,
        is_blocked: false,
        created_at: Utc::now(),
    }
}

/// A shipping address with fixture defaults.
#[must_use]
pub fn address(id: &str) -> Address {
    Address {
        id: AddressId::new(id),
        name: "Asha Rao".to_owned(),
        phone: "9876543210".to_owned(),
        address_line1: "14 Lake View Road".to_owned(),
        address_line2: None,
        city: "Chennai".to_owned(),
        state: "Tamil Nadu".to_owned(),
        pincode: "600001".to_owned(),
        is_default: true,
    }
}

/// A cart line with fixture defaults.
#[must_use]
pub fn cart_line(product: &str, quantity: u32, price: u32) -> CartItem {
    CartItem {
        product_id: ProductId::new(product),
        quantity,
        size: "M".to_owned(),
        color: "Black".to_owned(),
        price: Decimal::from(price),
    }
}
