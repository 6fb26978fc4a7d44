//! Per-user notifications, newest first.

use guava_core::{NotificationId, UserId};

use crate::error::StoreError;
use crate::events::StoreEvent;
use crate::keys;
use crate::models::Notification;
use crate::store::Store;

impl Store {
    /// Notifications for `user_id`, newest first.
    #[must_use]
    pub fn notifications(&self, user_id: &UserId) -> Vec<Notification> {
        self.read_collection(&keys::notifications(user_id))
    }

    /// Number of unread notifications for `user_id`.
    #[must_use]
    pub fn unread_notifications(&self, user_id: &UserId) -> usize {
        self.notifications(user_id)
            .iter()
            .filter(|notification| !notification.read)
            .count()
    }

    /// Prepend a notification to its owner's collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written back.
    pub fn add_notification(&self, notification: Notification) -> Result<(), StoreError> {
        let key = keys::notifications(&notification.user_id);
        let mut notifications = self.read_collection::<Notification>(&key);
        notifications.insert(0, notification);
        self.write_collection(&key, &notifications, StoreEvent::NotificationsChanged)
    }

    /// Flip a notification's read flag on. Unknown IDs are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written back.
    pub fn mark_notification_read(
        &self,
        user_id: &UserId,
        notification_id: &NotificationId,
    ) -> Result<(), StoreError> {
        let mut notifications = self.notifications(user_id);

        let Some(notification) = notifications
            .iter_mut()
            .find(|notification| notification.id == *notification_id)
        else {
            return Ok(());
        };

        notification.read = true;
        self.write_collection(
            &keys::notifications(user_id),
            &notifications,
            StoreEvent::NotificationsChanged,
        )
    }
}
