//! Seed the store document with the bundled catalog.
//!
//! Idempotent: each bundled product and coupon is upserted by ID, so
//! re-running refreshes the bundled records without disturbing anything
//! an admin added since.

use tracing::info;

use guava_store::{Store, StoreError, catalog};

/// Upsert the bundled products and coupons into the store.
///
/// # Errors
///
/// Returns an error if a collection cannot be written back.
pub fn run(store: &Store) -> Result<(), StoreError> {
    let products = catalog::default_products();
    for product in &products {
        store.save_product(product.clone())?;
    }
    info!("Seeded {} products", products.len());

    let coupons = catalog::default_coupons();
    for coupon in &coupons {
        store.save_coupon(coupon.clone())?;
    }
    info!("Seeded {} coupons", coupons.len());

    Ok(())
}
