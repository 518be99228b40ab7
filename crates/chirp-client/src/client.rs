//! The PostClient: a unified API over a ledger.
//!
//! Validates before writing, builds filters for reads, and decodes what
//! comes back. The client holds its configuration explicitly; nothing
//! here is process-wide.

use tracing::{debug, warn};

use chirp_core::{
    by_author, by_topic, codec, discriminator_filter, validate_content, validate_topic, Memcmp,
    Post, Pubkey,
};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::ledger::{Ledger, PostRequest};

/// Client facade over a [`Ledger`].
pub struct PostClient<L: Ledger> {
    config: ClientConfig,
    ledger: L,
}

impl<L: Ledger> PostClient<L> {
    /// Create a client for the given ledger and configuration.
    pub fn new(config: ClientConfig, ledger: L) -> Self {
        Self { config, ledger }
    }

    /// The client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Validate and submit a new post.
    ///
    /// Both field checks run before any ledger call, so a doomed write
    /// never leaves the process. Returns the new account's address.
    pub async fn send_post(
        &self,
        author: Pubkey,
        topic: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Pubkey> {
        let topic = topic.into();
        let content = content.into();

        validate_topic(&topic)?;
        validate_content(&content)?;

        let request = PostRequest {
            author,
            topic,
            content,
        };
        let address = self.ledger.submit_post(&request).await?;
        debug!(address = %address, author = %author, "post submitted");
        Ok(address)
    }

    /// Fetch and decode every post account.
    pub async fn all_posts(&self) -> Result<Vec<(Pubkey, Post)>> {
        self.fetch_and_decode(vec![]).await
    }

    /// Fetch and decode the posts of one author.
    pub async fn posts_by_author(&self, author: &Pubkey) -> Result<Vec<(Pubkey, Post)>> {
        self.fetch_and_decode(vec![by_author(author)]).await
    }

    /// Fetch and decode the posts under one topic.
    pub async fn posts_by_topic(&self, topic: &str) -> Result<Vec<(Pubkey, Post)>> {
        self.fetch_and_decode(vec![by_topic(topic)]).await
    }

    async fn fetch_and_decode(&self, mut filters: Vec<Memcmp>) -> Result<Vec<(Pubkey, Post)>> {
        filters.insert(0, discriminator_filter());
        let accounts = self.ledger.fetch_accounts(&filters).await?;
        Ok(decode_accounts(accounts))
    }
}

/// Decode a batch of `(address, buffer)` pairs.
///
/// One undecodable buffer is a corruption signal for that record alone:
/// it is logged and skipped, and the rest of the batch goes through.
/// Each decode is independent, so order and results never depend on the
/// bad records.
pub fn decode_accounts(accounts: Vec<(Pubkey, Vec<u8>)>) -> Vec<(Pubkey, Post)> {
    accounts
        .into_iter()
        .filter_map(|(address, bytes)| match codec::decode(&bytes) {
            Ok(post) => Some((address, post)),
            Err(err) => {
                warn!(address = %address, %err, "skipping undecodable account");
                None
            }
        })
        .collect()
}
