//! Admin account management commands.

use thiserror::Error;
use tracing::info;

use guava_core::{Email, EmailError};
use guava_store::{Store, StoreError};

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The given email does not parse.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The store could not be written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Create the bootstrap admin account.
///
/// Reuses an existing account with the same email rather than failing.
///
/// # Errors
///
/// Returns an error if the email is invalid or the store cannot be
/// written.
pub fn create(
    store: &Store,
    email: &str,
    name: &str,
    phone: &str,
    password: &str,
) -> Result<(), AdminError> {
    let email = Email::parse(email)?;
    let admin = store.ensure_admin_account(name, &email, phone, password)?;
    info!("Admin account ready: {} <{}>", admin.name, admin.email);
    Ok(())
}
