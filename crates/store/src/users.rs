//! User accounts and the login session.
//!
//! Credentials are cleartext comparisons against stored records, exactly
//! the trust model of the browser-local original. "Failures" here are
//! sentinel `None` values, not errors: a wrong password and an unknown
//! email are indistinguishable to the caller.

use chrono::Utc;

use guava_core::{Email, UserId, UserRole};

use crate::collection::upsert_where;
use crate::error::StoreError;
use crate::events::StoreEvent;
use crate::keys;
use crate::models::User;
use crate::store::Store;

impl Store {
    /// All registered users.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.read_collection(keys::USERS)
    }

    /// Insert or replace a user.
    ///
    /// The match key is email *or* phone: a record sharing either field
    /// with `user` is replaced, which is also what keeps both fields
    /// unique within the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written back.
    pub fn save_user(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users();
        let (email, phone) = (user.email.clone(), user.phone.clone());
        upsert_where(&mut users, user, |existing| {
            existing.email == email || existing.phone == phone
        });
        self.write_collection(keys::USERS, &users, StoreEvent::UsersChanged)
    }

    /// Look up a user by email.
    #[must_use]
    pub fn find_user_by_email(&self, email: &Email) -> Option<User> {
        self.users().into_iter().find(|user| user.email == *email)
    }

    /// Look up a user by phone number.
    #[must_use]
    pub fn find_user_by_phone(&self, phone: &str) -> Option<User> {
        self.users().into_iter().find(|user| user.phone == phone)
    }

    /// Check a password against the stored record.
    ///
    /// Returns the user on a match, `None` otherwise - including when the
    /// email is unknown.
    #[must_use]
    pub fn validate_password(&self, email: &Email, password: &str) -> Option<User> {
        self.find_user_by_email(email)
            .filter(|user| user.password == password)
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.read_record(keys::CURRENT_USER)
    }

    /// Record `user` as logged in.
    ///
    /// Stores a copy of the record; a later `save_user` does not refresh
    /// the session copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn set_current_user(&self, user: &User) -> Result<(), StoreError> {
        self.write_record(keys::CURRENT_USER, user, StoreEvent::AuthChanged)
    }

    /// Log out.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    pub fn clear_current_user(&self) -> Result<(), StoreError> {
        self.remove_key(keys::CURRENT_USER, StoreEvent::AuthChanged)
    }

    /// Whether someone is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }

    /// Whether the logged-in user is an admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(|user| user.is_admin())
    }

    /// Create the bootstrap admin account unless one already exists with
    /// this email. Returns the existing or newly created record.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written back.
    pub fn ensure_admin_account(
        &self,
        name: &str,
        email: &Email,
        phone: &str,
        password: &str,
    ) -> Result<User, StoreError> {
        if let Some(existing) = self.find_user_by_email(email) {
            return Ok(existing);
        }

        let admin = User {
            id: UserId::generate(),
            name: name.to_owned(),
            email: email.clone(),
            phone: phone.to_owned(),
            password: password.to_owned(),
            role: UserRole::Admin,
            is_blocked: false,
            created_at: Utc::now(),
        };
        self.save_user(admin.clone())?;
        Ok(admin)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(id: &str, email: &str, phone: &str) -> User {
        User {
            id: UserId::new(id),
            name: "Asha Rao".to_owned(),
            email: Email::parse(email).unwrap(),
            phone: phone.to_owned(),
            password: "hunter2".to_owned(),
            role: UserRole::Customer,
            is_blocked: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_save_user_appends_then_replaces() {
        let store = Store::in_memory();
        store.save_user(user("u-1", "a@example.com", "111")).unwrap();
        store.save_user(user("u-2", "b@example.com", "222")).unwrap();
        assert_eq!(store.users().len(), 2);

        let mut renamed = user("u-1", "a@example.com", "111");
        renamed.name = "Asha R.".to_owned();
        store.save_user(renamed).unwrap();

        let users = store.users();
        assert_eq!(users.len(), 2);
        assert_eq!(users.first().unwrap().name, "Asha R.");
    }

    #[test]
    fn test_save_user_matches_on_phone_too() {
        let store = Store::in_memory();
        store.save_user(user("u-1", "a@example.com", "111")).unwrap();
        store.save_user(user("u-9", "new@example.com", "111")).unwrap();

        let users = store.users();
        assert_eq!(users.len(), 1);
        assert_eq!(users.first().unwrap().id, UserId::new("u-9"));
    }

    #[test]
    fn test_find_by_email_and_phone() {
        let store = Store::in_memory();
        store.save_user(user("u-1", "a@example.com", "111")).unwrap();

        let email = Email::parse("a@example.com").unwrap();
        assert_eq!(
            store.find_user_by_email(&email).unwrap().id,
            UserId::new("u-1")
        );
        assert_eq!(
            store.find_user_by_phone("111").unwrap().id,
            UserId::new("u-1")
        );
        assert!(store.find_user_by_phone("999").is_none());
    }

    #[test]
    fn test_validate_password() {
        let store = Store::in_memory();
        store.save_user(user("u-1", "a@example.com", "111")).unwrap();
        let email = Email::parse("a@example.com").unwrap();

        assert!(store.validate_password(&email, "hunter2").is_some());
        assert!(store.validate_password(&email, "wrong").is_none());

        let unknown = Email::parse("nobody@example.com").unwrap();
        assert!(store.validate_password(&unknown, "hunter2").is_none());
    }

    #[test]
    fn test_session_lifecycle() {
        let store = Store::in_memory();
        assert!(!store.is_logged_in());

        let shopper = user("u-1", "a@example.com", "111");
        store.set_current_user(&shopper).unwrap();
        assert!(store.is_logged_in());
        assert!(!store.is_admin());
        assert_eq!(store.current_user().unwrap().id, shopper.id);

        store.clear_current_user().unwrap();
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_ensure_admin_account_is_idempotent() {
        let store = Store::in_memory();
        let email = Email::parse("admin@guavashop.dev").unwrap();

        let created = store
            .ensure_admin_account("Admin", &email, "9999999999", "admin123")
            .unwrap();
        let again = store
            .ensure_admin_account("Admin", &email, "9999999999", "admin123")
            .unwrap();

        assert_eq!(created.id, again.id);
        assert_eq!(store.users().len(), 1);
        assert!(created.is_admin());
    }
}
