//! Byte layout of a post account.
//!
//! Every post account starts with a fixed-width region (discriminator,
//! author, timestamp), followed by two length-prefixed UTF-8 strings in
//! declared order: topic, then content. Later offsets depend on earlier
//! lengths, so the two strings must be decoded (or skipped) in order.
//!
//! Because topic is the *first* variable-length field, the offset of its
//! bytes is still a layout constant. Content's offset is not: it moves
//! with the topic's byte length.

/// Width of the account-type discriminator at the start of every account.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Width of a public identity.
pub const PUBKEY_LEN: usize = 32;

/// Width of the creation timestamp (i64, unix seconds).
pub const TIMESTAMP_LEN: usize = 8;

/// Width of the byte-length prefix on each variable-length string.
pub const STRING_PREFIX_LEN: usize = 4;

/// Maximum topic length, in characters. The topic may be empty.
pub const MAX_TOPIC_CHARS: usize = 50;

/// Maximum content length, in characters. Content may not be empty.
pub const MAX_CONTENT_CHARS: usize = 280;

/// Byte offset of the author identity (immediately after the discriminator).
pub const AUTHOR_OFFSET: usize = DISCRIMINATOR_LEN;

/// Byte offset of the timestamp.
pub const TIMESTAMP_OFFSET: usize = AUTHOR_OFFSET + PUBKEY_LEN;

/// Byte offset of the topic's length prefix (end of the fixed-width region).
pub const TOPIC_PREFIX_OFFSET: usize = TIMESTAMP_OFFSET + TIMESTAMP_LEN;

/// Byte offset of the topic's UTF-8 bytes.
pub const TOPIC_BYTES_OFFSET: usize = TOPIC_PREFIX_OFFSET + STRING_PREFIX_LEN;

/// Byte offset of the content's length prefix, given the topic's byte
/// length. Not a constant: the topic precedes it.
pub const fn content_prefix_offset(topic_byte_len: usize) -> usize {
    TOPIC_BYTES_OFFSET + topic_byte_len
}

/// Byte offset of the content's UTF-8 bytes, given the topic's byte length.
pub const fn content_bytes_offset(topic_byte_len: usize) -> usize {
    content_prefix_offset(topic_byte_len) + STRING_PREFIX_LEN
}

/// The fully padded account size the ledger allocates per post.
///
/// Strings are sized for the UTF-8 worst case of 4 bytes per character.
pub const MAX_ACCOUNT_LEN: usize = DISCRIMINATOR_LEN
    + PUBKEY_LEN
    + TIMESTAMP_LEN
    + STRING_PREFIX_LEN
    + MAX_TOPIC_CHARS * 4
    + STRING_PREFIX_LEN
    + MAX_CONTENT_CHARS * 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_region_offsets() {
        assert_eq!(AUTHOR_OFFSET, 8);
        assert_eq!(TIMESTAMP_OFFSET, 40);
        assert_eq!(TOPIC_PREFIX_OFFSET, 48);
        assert_eq!(TOPIC_BYTES_OFFSET, 52);
    }

    #[test]
    fn test_content_offset_tracks_topic_length() {
        assert_eq!(content_prefix_offset(0), 52);
        assert_eq!(content_bytes_offset(0), 56);

        // "solana" is 6 bytes
        assert_eq!(content_prefix_offset(6), 58);
        assert_eq!(content_bytes_offset(6), 62);
    }

    #[test]
    fn test_max_account_len() {
        // 8 + 32 + 8 + 4 + 200 + 4 + 1120
        assert_eq!(MAX_ACCOUNT_LEN, 1376);
    }
}
