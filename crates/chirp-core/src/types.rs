//! Strong type definitions for Chirp.
//!
//! Identities are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A 32-byte public identity on the ledger.
///
/// Used both for post authors and for the account addresses that hold
/// posts. The canonical text form is base58, matching the ledger's
/// tooling and its filter comparator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pubkey(pub [u8; 32]);

/// Errors when parsing a [`Pubkey`] from its base58 text form.
#[derive(Debug, Error)]
pub enum ParsePubkeyError {
    #[error("invalid base58: {0}")]
    Base58(#[from] bs58::decode::Error),

    #[error("decoded identity is {0} bytes, expected 32")]
    BadLength(usize),
}

impl Pubkey {
    /// Create a new Pubkey from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to the canonical base58 string.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Parse from a base58 string.
    pub fn from_base58(s: &str) -> Result<Self, ParsePubkeyError> {
        let bytes = bs58::decode(s).into_vec()?;
        if bytes.len() != 32 {
            return Err(ParsePubkeyError::BadLength(bytes.len()));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Shortened human-readable form: first 4 and last 4 characters of
    /// the base58 encoding, joined by "..".
    pub fn display_short(&self) -> String {
        let full = self.to_base58();
        format!("{}..{}", &full[..4], &full[full.len() - 4..])
    }

    /// The zero identity (used as a sentinel).
    pub const ZERO: Self = Self([0u8; 32]);
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self.to_base58())
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Pubkey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Pubkey {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 32] = slice.try_into()?;
        Ok(Self(arr))
    }
}
