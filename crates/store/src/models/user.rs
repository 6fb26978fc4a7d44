//! User record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use guava_core::{Email, UserId, UserRole};

/// A registered shopper or admin.
///
/// The password is stored in cleartext - this store simulates a browser's
/// local storage, where the original kept it the same way. Email and phone
/// are each expected unique across the collection; uniqueness is enforced
/// only by the linear scan in `save_user`, not structurally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub password: String,
    pub role: UserRole,
    /// Blocked users keep their record but may not log in.
    #[serde(default)]
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether this user may act as an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
