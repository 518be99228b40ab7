//! In-memory implementation of the Ledger trait.
//!
//! This is primarily for testing. It mirrors the real program's
//! enforcement (same bounds, same rejection messages) but keeps every
//! account in a map with no persistence.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;

use chirp_core::{codec, layout, Memcmp, Post, Pubkey, ValidateError};

use crate::error::LedgerError;
use crate::ledger::{Ledger, PostRequest};

enum Clock {
    System,
    Fixed(i64),
}

/// In-memory ledger.
///
/// All accounts are lost when the ledger is dropped. Thread-safe via
/// RwLock.
pub struct MemoryLedger {
    accounts: RwLock<HashMap<Pubkey, Vec<u8>>>,
    clock: Clock,
}

impl MemoryLedger {
    /// Create an empty ledger using the system clock.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            clock: Clock::System,
        }
    }

    /// Create an empty ledger whose clock always reads `unix_seconds`.
    pub fn with_fixed_clock(unix_seconds: i64) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            clock: Clock::Fixed(unix_seconds),
        }
    }

    /// Insert raw account bytes directly, bypassing validation and
    /// encoding. Lets tests plant corrupted or foreign accounts.
    pub fn insert_raw(&self, address: Pubkey, bytes: Vec<u8>) {
        self.accounts.write().unwrap().insert(address, bytes);
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.accounts.read().unwrap().len()
    }

    /// Whether the ledger holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.read().unwrap().is_empty()
    }

    fn now(&self) -> i64 {
        match self.clock {
            Clock::Fixed(ts) => ts,
            Clock::System => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time went backwards")
                .as_secs() as i64,
        }
    }

    /// The program's own field checks, applied server-side.
    fn enforce_bounds(request: &PostRequest) -> Result<(), LedgerError> {
        if request.topic.chars().count() > layout::MAX_TOPIC_CHARS {
            return Err(LedgerError::Rejected(
                ValidateError::TopicTooLong.to_string(),
            ));
        }
        if request.content.is_empty() {
            return Err(LedgerError::Rejected(
                ValidateError::ContentEmpty.to_string(),
            ));
        }
        if request.content.chars().count() > layout::MAX_CONTENT_CHARS {
            return Err(LedgerError::Rejected(
                ValidateError::ContentTooLong.to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Ledger for MemoryLedger {
    async fn submit_post(&self, request: &PostRequest) -> Result<Pubkey, LedgerError> {
        Self::enforce_bounds(request)?;

        let post = Post {
            author: request.author,
            timestamp: self.now(),
            topic: request.topic.clone(),
            content: request.content.clone(),
        };

        let address = Pubkey::from_bytes(rand::random());
        let bytes = codec::encode(&post);

        self.accounts.write().unwrap().insert(address, bytes);
        Ok(address)
    }

    async fn fetch_accounts(
        &self,
        filters: &[Memcmp],
    ) -> Result<Vec<(Pubkey, Vec<u8>)>, LedgerError> {
        let accounts = self.accounts.read().unwrap();
        Ok(accounts
            .iter()
            .filter(|(_, bytes)| filters.iter().all(|f| f.matches(bytes)))
            .map(|(addr, bytes)| (*addr, bytes.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(topic: &str, content: &str) -> PostRequest {
        PostRequest {
            author: Pubkey::from_bytes([0x42; 32]),
            topic: topic.into(),
            content: content.into(),
        }
    }

    #[tokio::test]
    async fn test_submit_and_fetch() {
        let ledger = MemoryLedger::with_fixed_clock(1_700_000_000);
        let address = ledger.submit_post(&request("solana", "gm")).await.unwrap();

        let accounts = ledger.fetch_accounts(&[]).await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].0, address);

        let post = codec::decode(&accounts[0].1).unwrap();
        assert_eq!(post.topic, "solana");
        assert_eq!(post.content, "gm");
        assert_eq!(post.timestamp, 1_700_000_000);
    }

    #[tokio::test]
    async fn test_rejects_long_topic_with_program_message() {
        let ledger = MemoryLedger::new();
        let result = ledger
            .submit_post(&request(&"x".repeat(51), "fine"))
            .await;

        match result {
            Err(LedgerError::Rejected(msg)) => {
                assert_eq!(msg, "The provided topic should be 50 characters long maximum.")
            }
            other => panic!("expected rejection, got {:?}", other.map(|_| ())),
        }
        assert!(ledger.is_empty());
    }

    #[tokio::test]
    async fn test_rejects_long_and_empty_content() {
        let ledger = MemoryLedger::new();

        assert!(matches!(
            ledger.submit_post(&request("web3", &"x".repeat(281))).await,
            Err(LedgerError::Rejected(_))
        ));
        assert!(matches!(
            ledger.submit_post(&request("web3", "")).await,
            Err(LedgerError::Rejected(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_applies_all_filters() {
        let ledger = MemoryLedger::with_fixed_clock(1_700_000_000);
        let a = Pubkey::from_bytes([0xaa; 32]);
        let b = Pubkey::from_bytes([0xbb; 32]);

        for (author, topic) in [(a, "solana"), (a, "web3"), (b, "solana")] {
            let req = PostRequest {
                author,
                topic: topic.into(),
                content: "hello".into(),
            };
            ledger.submit_post(&req).await.unwrap();
        }

        let filters = [chirp_core::by_author(&a), chirp_core::by_topic("solana")];
        let matches = ledger.fetch_accounts(&filters).await.unwrap();
        assert_eq!(matches.len(), 1);

        let post = codec::decode(&matches[0].1).unwrap();
        assert_eq!(post.author, a);
        assert_eq!(post.topic, "solana");
    }
}
