//! Error types for Chirp core.

use thiserror::Error;

/// Validation failures for user-supplied post fields.
///
/// These are recoverable and user-correctable. The display strings for
/// the two length bounds reproduce the on-chain program's messages
/// verbatim: user-facing error text is part of the contract under test,
/// and a client-rejected input must also have been ledger-rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidateError {
    #[error("The provided topic should be 50 characters long maximum.")]
    TopicTooLong,

    #[error("The provided content should be 280 characters long maximum.")]
    ContentTooLong,

    #[error("The provided content should be at least 1 character long.")]
    ContentEmpty,
}

/// Decode failures on raw account bytes.
///
/// These indicate a corrupted buffer or a schema mismatch, not user
/// error. During batch decode a failing record is skipped and reported,
/// never allowed to abort the whole listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("buffer ended inside {field}: needed {needed} more bytes, {got} remain")]
    BufferTooShort {
        field: &'static str,
        needed: usize,
        got: usize,
    },

    #[error("{field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },
}

/// Filter construction failures.
///
/// These are programmer errors and fail fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("cannot build an offset filter on {0}: its offset depends on preceding field lengths")]
    UnsupportedField(&'static str),
}
