//! Post: one decoded record from the ledger.
//!
//! A post is an immutable value. Author and timestamp are set once at
//! creation by the ledger; no update or delete path exists.

use serde::{Deserialize, Serialize};

use crate::types::Pubkey;

/// A decoded post account.
///
/// Owns all of its fields and holds no reference back to the source
/// buffer or to any ledger connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// The author's public identity. Immutable after creation.
    pub author: Pubkey,

    /// Creation time in unix seconds, assigned by the ledger's clock.
    pub timestamp: i64,

    /// Topic string, 0..=50 characters.
    pub topic: String,

    /// Content string, 1..=280 characters.
    pub content: String,
}

impl Post {
    /// Shortened display form of the author identity, e.g. "B4aa..9XkP".
    pub fn author_display(&self) -> String {
        self.author.display_short()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_display_matches_pubkey() {
        let post = Post {
            author: Pubkey::from_bytes([0x11; 32]),
            timestamp: 1_700_000_000,
            topic: "solana".into(),
            content: "gm".into(),
        };
        assert_eq!(post.author_display(), post.author.display_short());
    }

    #[test]
    fn test_post_serde_roundtrip() {
        let post = Post {
            author: Pubkey::from_bytes([0x22; 32]),
            timestamp: 1_700_000_000,
            topic: "web3".into(),
            content: "How much does each message cost to send?".into(),
        };
        let json = serde_json::to_string(&post).unwrap();
        let back: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(post, back);
    }
}
