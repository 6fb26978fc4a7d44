//! Change notification at the store boundary.
//!
//! Consumers re-render by re-querying the store; the event only names the
//! aspect of state that changed and carries no payload. Dispatch is
//! synchronous and in-process - the subscriber runs before the mutating
//! call returns, on the same thread.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// The aspect of store state a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreEvent {
    CartChanged,
    /// The logged-in user changed (login, logout, profile refresh).
    AuthChanged,
    UsersChanged,
    OrdersChanged,
    AddressesChanged,
    WishlistChanged,
    NotificationsChanged,
    ProductsChanged,
    CouponsChanged,
}

/// Handle returned by [`crate::Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Callback = Arc<dyn Fn(StoreEvent) + Send + Sync>;

/// Registry of change subscribers.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: AtomicU64,
    entries: Mutex<Vec<(Subscription, Callback)>>,
}

impl Subscribers {
    pub(crate) fn subscribe(
        &self,
        callback: impl Fn(StoreEvent) + Send + Sync + 'static,
    ) -> Subscription {
        let subscription = Subscription(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((subscription, Arc::new(callback)));
        subscription
    }

    /// Returns whether the subscription was still registered.
    pub(crate) fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|(existing, _)| *existing != subscription);
        entries.len() < before
    }

    /// Notify every subscriber, in registration order.
    ///
    /// Callbacks run outside the registry lock, so a subscriber may call
    /// back into the store (including subscribing or unsubscribing).
    pub(crate) fn emit(&self, event: StoreEvent) {
        let callbacks: Vec<Callback> = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in callbacks {
            callback(event);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("Subscribers").field("count", &count).finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_reaches_all_subscribers() {
        let subscribers = Subscribers::default();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for _ in 0..2 {
            let seen = Arc::clone(&seen);
            subscribers.subscribe(move |event| seen.lock().unwrap().push(event));
        }

        subscribers.emit(StoreEvent::CartChanged);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![StoreEvent::CartChanged, StoreEvent::CartChanged]
        );
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let subscribers = Subscribers::default();
        let seen = Arc::new(Mutex::new(0_u32));

        let subscription = {
            let seen = Arc::clone(&seen);
            subscribers.subscribe(move |_| *seen.lock().unwrap() += 1)
        };

        subscribers.emit(StoreEvent::OrdersChanged);
        assert!(subscribers.unsubscribe(subscription));
        subscribers.emit(StoreEvent::OrdersChanged);

        assert_eq!(*seen.lock().unwrap(), 1);
        assert!(!subscribers.unsubscribe(subscription));
    }
}
