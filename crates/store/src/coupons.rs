//! Coupon management and validation.

use chrono::Utc;
use rust_decimal::Decimal;

use guava_core::{CouponId, CouponKind};

use crate::catalog;
use crate::collection::upsert_where;
use crate::error::StoreError;
use crate::events::StoreEvent;
use crate::keys;
use crate::models::Coupon;
use crate::store::Store;

/// Result of validating a coupon code against a purchase amount.
///
/// Rejections are values, not errors: `valid` is false, `discount` is
/// zero, and `message` is suitable for showing to the shopper as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponOutcome {
    pub valid: bool,
    pub discount: Decimal,
    pub message: String,
}

impl CouponOutcome {
    fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            discount: Decimal::ZERO,
            message: message.into(),
        }
    }
}

impl Store {
    /// All coupons, falling back to the bundled set when none are stored.
    #[must_use]
    pub fn coupons(&self) -> Vec<Coupon> {
        self.read_collection_or(keys::COUPONS, catalog::default_coupons)
    }

    /// Insert or replace a coupon by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written back.
    pub fn save_coupon(&self, coupon: Coupon) -> Result<(), StoreError> {
        let mut coupons = self.coupons();
        let id = coupon.id.clone();
        upsert_where(&mut coupons, coupon, |existing| existing.id == id);
        self.write_collection(keys::COUPONS, &coupons, StoreEvent::CouponsChanged)
    }

    /// Delete the coupon with the given ID; other coupons are untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written back.
    pub fn delete_coupon(&self, coupon_id: &CouponId) -> Result<(), StoreError> {
        let mut coupons = self.coupons();
        coupons.retain(|coupon| coupon.id != *coupon_id);
        self.write_collection(keys::COUPONS, &coupons, StoreEvent::CouponsChanged)
    }

    /// Validate `code` against `total_amount` and compute the discount.
    ///
    /// Checks run in order: the code must name an active coupon
    /// (case-insensitive), the coupon must not be past its expiry date,
    /// and the amount must meet the minimum purchase. A percentage coupon
    /// discounts proportionally, clamped to its cap when one is set; a
    /// fixed coupon discounts its value verbatim.
    ///
    /// Pure: mutates nothing, emits nothing.
    #[must_use]
    pub fn apply_coupon(&self, code: &str, total_amount: Decimal) -> CouponOutcome {
        let coupons = self.coupons();
        let Some(coupon) = coupons
            .iter()
            .find(|coupon| coupon.active && coupon.code.eq_ignore_ascii_case(code))
        else {
            return CouponOutcome::rejected("Invalid coupon code");
        };

        if Utc::now().date_naive() > coupon.expiry_date {
            return CouponOutcome::rejected("Coupon has expired");
        }

        if total_amount < coupon.min_purchase {
            return CouponOutcome::rejected(format!(
                "Minimum purchase of ₹{} required",
                coupon.min_purchase
            ));
        }

        let discount = match coupon.kind {
            CouponKind::Percentage => {
                let proportional = total_amount * coupon.discount / Decimal::ONE_HUNDRED;
                coupon
                    .max_discount
                    .map_or(proportional, |cap| proportional.min(cap))
            }
            CouponKind::Fixed => coupon.discount,
        };

        CouponOutcome {
            valid: true,
            discount,
            message: "Coupon applied successfully!".to_owned(),
        }
    }
}
