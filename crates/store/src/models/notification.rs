//! Notification record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use guava_core::{NotificationId, NotificationKind, UserId};

/// A per-user message, created alongside order placement and by admin
/// promotions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
