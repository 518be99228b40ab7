//! The Ledger trait: the abstract seam to the external ledger service.
//!
//! Everything this crate does not reimplement lives behind this trait:
//! consensus, signing, transport, fees, persistence. A ledger stores one
//! opaque byte buffer per account and can run server-side equality
//! filters over byte ranges of those buffers. The in-memory
//! implementation in [`crate::memory`] exists for tests.

use async_trait::async_trait;

use chirp_core::{Memcmp, Pubkey};

use crate::error::LedgerError;

/// The structured write instruction for a new post.
///
/// The ledger assigns the timestamp from its own clock and the account
/// address for the freshly created account; neither is client input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    /// The signing identity the post is attributed to.
    pub author: Pubkey,

    /// Topic string, validated client-side before submission.
    pub topic: String,

    /// Content string, validated client-side before submission.
    pub content: String,
}

/// Async interface to the ledger service.
///
/// # Design Notes
///
/// - **Server-side enforcement**: a conforming ledger applies the same
///   field bounds as [`chirp_core::validate`] and rejects with the same
///   messages, so client and ledger never disagree on validity.
/// - **No ordering guarantee**: `fetch_accounts` returns matches in
///   arbitrary order.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Submit a post for creation.
    ///
    /// Returns the address of the newly created account.
    async fn submit_post(&self, request: &PostRequest) -> Result<Pubkey, LedgerError>;

    /// Fetch all accounts matching every filter in `filters`.
    ///
    /// Returns `(address, raw buffer)` pairs.
    async fn fetch_accounts(
        &self,
        filters: &[Memcmp],
    ) -> Result<Vec<(Pubkey, Vec<u8>)>, LedgerError>;
}
