//! Binary codec for post accounts.
//!
//! Layout (see [`crate::layout`]):
//!
//! ```text
//! discriminator (8) || author (32) || timestamp (i64 LE)
//!   || topic_len (u32 LE) || topic bytes
//!   || content_len (u32 LE) || content bytes
//! ```
//!
//! The two strings are positional: content's offset depends on topic's
//! byte length, so they must be read in declared order.

use crate::error::DecodeError;
use crate::layout::{DISCRIMINATOR_LEN, PUBKEY_LEN, STRING_PREFIX_LEN, TIMESTAMP_LEN};
use crate::post::Post;
use crate::types::Pubkey;

/// The account-type tag the ledger prefixes to every post account.
///
/// The decoder never inspects it: buffers arrive from a type-filtered
/// query, so the tag is assumed correct. It is only written on encode
/// and matched on in the discriminator filter.
pub const POST_DISCRIMINATOR: [u8; 8] = [0x7c, 0x2a, 0x91, 0x0e, 0xd4, 0x66, 0x38, 0xb5];

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, n: usize, field: &'static str) -> Result<&'a [u8], DecodeError> {
        let got = self.buf.len() - self.pos;
        if got < n {
            return Err(DecodeError::BufferTooShort {
                field,
                needed: n,
                got,
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn take_u32(&mut self, field: &'static str) -> Result<u32, DecodeError> {
        let bytes = self.take(STRING_PREFIX_LEN, field)?;
        let mut arr = [0u8; STRING_PREFIX_LEN];
        arr.copy_from_slice(bytes);
        Ok(u32::from_le_bytes(arr))
    }

    fn take_string(&mut self, field: &'static str) -> Result<String, DecodeError> {
        let len = self.take_u32(field)? as usize;
        let bytes = self.take(len, field)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::InvalidUtf8 { field })
    }
}

/// Decode a raw account buffer into a [`Post`].
///
/// Fails with [`DecodeError::BufferTooShort`] if the buffer ends before
/// any declared field completes, naming the field that was cut off.
pub fn decode(buf: &[u8]) -> Result<Post, DecodeError> {
    let mut reader = Reader::new(buf);

    reader.take(DISCRIMINATOR_LEN, "discriminator")?;

    let mut author_bytes = [0u8; PUBKEY_LEN];
    author_bytes.copy_from_slice(reader.take(PUBKEY_LEN, "author")?);
    let author = Pubkey::from_bytes(author_bytes);

    let mut ts_bytes = [0u8; TIMESTAMP_LEN];
    ts_bytes.copy_from_slice(reader.take(TIMESTAMP_LEN, "timestamp")?);
    let timestamp = i64::from_le_bytes(ts_bytes);

    let topic = reader.take_string("topic")?;
    let content = reader.take_string("content")?;

    Ok(Post {
        author,
        timestamp,
        topic,
        content,
    })
}

/// Encode a [`Post`] into account bytes, including the discriminator.
///
/// This is the exact inverse of [`decode`]. The client uses it for
/// round-trip tests; ledger implementations use it when materializing
/// accepted writes.
pub fn encode(post: &Post) -> Vec<u8> {
    let topic = post.topic.as_bytes();
    let content = post.content.as_bytes();

    let mut buf = Vec::with_capacity(
        DISCRIMINATOR_LEN
            + PUBKEY_LEN
            + TIMESTAMP_LEN
            + STRING_PREFIX_LEN
            + topic.len()
            + STRING_PREFIX_LEN
            + content.len(),
    );

    buf.extend_from_slice(&POST_DISCRIMINATOR);
    buf.extend_from_slice(post.author.as_bytes());
    buf.extend_from_slice(&post.timestamp.to_le_bytes());
    buf.extend_from_slice(&(topic.len() as u32).to_le_bytes());
    buf.extend_from_slice(topic);
    buf.extend_from_slice(&(content.len() as u32).to_le_bytes());
    buf.extend_from_slice(content);

    buf
}
