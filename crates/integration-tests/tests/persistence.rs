//! The file-backed document across process boundaries (simulated by
//! reopening the store on the same path).

#![allow(clippy::unwrap_used)]

use guava_core::{ProductId, UserId};
use guava_integration_tests::{cart_line, customer};
use guava_store::Store;

#[test]
fn test_collections_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guava-store.json");
    let user = UserId::new("u-1");

    {
        let store = Store::open(&path).unwrap();
        store
            .save_user(customer("u-1", "asha@example.com", "9876543210"))
            .unwrap();
        store.add_to_cart(cart_line("prod-003", 2, 899)).unwrap();
        store
            .toggle_wishlist(&user, &ProductId::new("prod-004"))
            .unwrap();
    }

    let reopened = Store::open(&path).unwrap();
    assert_eq!(reopened.users().len(), 1);
    assert_eq!(reopened.cart(), vec![cart_line("prod-003", 2, 899)]);
    assert!(reopened.is_wishlisted(&user, &ProductId::new("prod-004")));
}

#[test]
fn test_session_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guava-store.json");

    {
        let store = Store::open(&path).unwrap();
        let shopper = customer("u-1", "asha@example.com", "9876543210");
        store.save_user(shopper.clone()).unwrap();
        store.set_current_user(&shopper).unwrap();
    }

    let reopened = Store::open(&path).unwrap();
    assert!(reopened.is_logged_in());
    assert_eq!(reopened.current_user().unwrap().id, UserId::new("u-1"));
}

#[test]
fn test_corrupt_document_degrades_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guava-store.json");
    std::fs::write(&path, "definitely not json").unwrap();

    let store = Store::open(&path).unwrap();
    assert!(store.cart().is_empty());
    assert!(!store.products().is_empty(), "bundled catalog still serves");

    // The store stays writable after discarding the corrupt document
    store.add_to_cart(cart_line("prod-003", 1, 899)).unwrap();
    assert_eq!(store.cart().len(), 1);
}

#[test]
fn test_clearing_cart_removes_only_its_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guava-store.json");
    let user = UserId::new("u-1");

    let store = Store::open(&path).unwrap();
    store.add_to_cart(cart_line("prod-003", 1, 899)).unwrap();
    store
        .toggle_wishlist(&user, &ProductId::new("prod-004"))
        .unwrap();

    store.clear_cart().unwrap();

    let reopened = Store::open(&path).unwrap();
    assert!(reopened.cart().is_empty());
    assert!(reopened.is_wishlisted(&user, &ProductId::new("prod-004")));
}
