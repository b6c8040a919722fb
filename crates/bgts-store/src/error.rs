//! # Store Errors
//!
//! Failures from record store operations. Validation and not-found
//! errors carry enough detail for a caller to correct its input; I/O and
//! serialization failures wrap their source and are surfaced to clients
//! as opaque storage failures by the HTTP layer.

use thiserror::Error;

use bgts_core::{GiftId, GiftStatus, ValidationError};

/// Record store failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Submission input failed validation. Nothing was stored.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No declaration with the given id.
    #[error("declaration {0} not found")]
    NotFound(GiftId),

    /// A review decision was applied to a non-pending declaration.
    #[error("declaration {id} is {status}; only pending declarations can be reviewed")]
    AlreadyReviewed { id: GiftId, status: GiftStatus },

    /// The four-digit reference space for the year is used up.
    #[error("reference space exhausted for {year}")]
    ReferencesExhausted { year: i32 },

    /// Reading or writing the backing file failed.
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file holds JSON this version cannot read, or a record
    /// failed to serialize.
    #[error("storage serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}
