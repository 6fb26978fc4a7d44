//! Shipping address record.

use serde::{Deserialize, Serialize};

use guava_core::AddressId;

/// A saved shipping profile, owned by exactly one user via key scoping.
///
/// Orders copy the chosen address by value at creation time; editing or
/// deleting the saved address afterwards never touches placed orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub name: String,
    pub phone: String,
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub is_default: bool,
}
