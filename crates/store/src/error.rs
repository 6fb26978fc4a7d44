//! Store error type.
//!
//! Only writing can fail: reads treat absent or unreadable state as empty
//! (the storage layer has no notion of a missing collection being an
//! error), and domain-level rejections such as an invalid coupon code are
//! ordinary return values, never `Err`.

use thiserror::Error;

/// Errors that can occur while persisting a collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A collection could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
