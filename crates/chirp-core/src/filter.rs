//! Server-side equality filters over account bytes.
//!
//! The ledger's query facility accepts `(offset, value)` pairs and
//! returns only accounts whose bytes at `offset` equal `value`. This
//! module computes those pairs for the predicates the post layout can
//! support without knowing variable field lengths up front:
//!
//! - by author: offset 8, always fixed.
//! - by topic: offset 52. Fixed only because topic is the *first*
//!   variable-length field; had content preceded it, this offset would
//!   depend on content's length and no constant filter would exist.
//!
//! Filtering on content bytes is refused for exactly that reason:
//! callers wanting content search must decode and filter client-side.

use serde::{Deserialize, Serialize};

use crate::codec::POST_DISCRIMINATOR;
use crate::error::FilterError;
use crate::layout::{AUTHOR_OFFSET, TOPIC_BYTES_OFFSET};
use crate::types::Pubkey;

/// One equality filter: account bytes at `offset` must equal `bytes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memcmp {
    pub offset: usize,
    pub bytes: Vec<u8>,
}

impl Memcmp {
    /// Create a filter from an offset and the bytes to match.
    pub fn new(offset: usize, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            offset,
            bytes: bytes.into(),
        }
    }

    /// Apply the predicate to a raw account buffer.
    ///
    /// Accounts shorter than `offset + bytes.len()` do not match.
    pub fn matches(&self, account: &[u8]) -> bool {
        account
            .get(self.offset..self.offset + self.bytes.len())
            .is_some_and(|window| window == self.bytes)
    }

    /// The match value in base58, the text form the ledger's query
    /// facility takes on the wire.
    pub fn bytes_base58(&self) -> String {
        bs58::encode(&self.bytes).into_string()
    }
}

/// Fields of a post that a caller may ask to filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    Author,
    Topic,
    Content,
}

/// Filter for posts by a given author.
pub fn by_author(author: &Pubkey) -> Memcmp {
    Memcmp::new(AUTHOR_OFFSET, author.as_bytes().to_vec())
}

/// Filter for posts with a given topic.
pub fn by_topic(topic: &str) -> Memcmp {
    Memcmp::new(TOPIC_BYTES_OFFSET, topic.as_bytes().to_vec())
}

/// Filter matching the post account type tag, prepended to every query
/// so only post accounts come back.
pub fn discriminator_filter() -> Memcmp {
    Memcmp::new(0, POST_DISCRIMINATOR.to_vec())
}

/// Generic filter construction over [`PostField`].
///
/// Fails fast with [`FilterError::UnsupportedField`] for `Content`: its
/// offset depends on the preceding topic's length and is not a layout
/// constant this protocol can express.
pub fn by_field(field: PostField, value: &[u8]) -> Result<Memcmp, FilterError> {
    match field {
        PostField::Author => Ok(Memcmp::new(AUTHOR_OFFSET, value.to_vec())),
        PostField::Topic => Ok(Memcmp::new(TOPIC_BYTES_OFFSET, value.to_vec())),
        PostField::Content => Err(FilterError::UnsupportedField("content")),
    }
}
