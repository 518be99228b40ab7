//! Error types for the client crate.

use thiserror::Error;

use chirp_core::ValidateError;

/// Errors reported by a [`crate::Ledger`] implementation.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The ledger program rejected the write. Carries the program's
    /// machine-readable message verbatim.
    #[error("ledger rejected the write: {0}")]
    Rejected(String),

    /// Transport-level failure reaching the ledger. Retrying is the
    /// transport collaborator's business, not this crate's.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors surfaced by [`crate::PostClient`] operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validate(#[from] ValidateError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
