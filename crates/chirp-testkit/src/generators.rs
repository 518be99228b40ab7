//! Proptest generators for property-based testing.

use proptest::prelude::*;

use chirp_core::{Post, Pubkey};

/// Generate a random Pubkey.
pub fn pubkey() -> impl Strategy<Value = Pubkey> {
    any::<[u8; 32]>().prop_map(Pubkey::from_bytes)
}

/// Generate a valid topic: 0..=50 characters, any scalar values.
pub fn topic() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..=50).prop_map(|chars| chars.into_iter().collect())
}

/// Generate valid content: 1..=280 characters, any scalar values.
pub fn content() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 1..=280).prop_map(|chars| chars.into_iter().collect())
}

/// Generate a plausible unix-seconds timestamp.
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=4_102_444_800 // up to year 2100
}

/// Generate a fully valid Post.
pub fn post() -> impl Strategy<Value = Post> {
    (pubkey(), timestamp(), topic(), content()).prop_map(|(author, timestamp, topic, content)| {
        Post {
            author,
            timestamp,
            topic,
            content,
        }
    })
}
