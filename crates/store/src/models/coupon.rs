//! Coupon record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use guava_core::{CouponId, CouponKind};

/// A promotional discount rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: CouponId,
    /// Redemption code; matched case-insensitively.
    pub code: String,
    /// Percent for [`CouponKind::Percentage`], flat amount for
    /// [`CouponKind::Fixed`].
    pub discount: Decimal,
    #[serde(rename = "type")]
    pub kind: CouponKind,
    /// Purchase floor below which the coupon is rejected.
    pub min_purchase: Decimal,
    /// Cap on the computed discount; percentage kind only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<Decimal>,
    /// Last day the coupon is redeemable, inclusive.
    pub expiry_date: NaiveDate,
    pub active: bool,
}
