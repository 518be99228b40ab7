//! # Chirp Client
//!
//! Client facade for the Chirp on-chain post store. Brings together
//! validation, filter building, and decoding from `chirp-core` behind a
//! single API, with the ledger service itself abstracted as a trait.
//!
//! ## Overview
//!
//! The [`Ledger`] trait is the seam to the external ledger: it stores
//! one opaque byte buffer per account and runs server-side equality
//! filters over byte ranges. [`MemoryLedger`] implements it in memory
//! for tests. [`PostClient`] is the API applications use.
//!
//! ## Key Types
//!
//! - [`PostClient`] - Validate-then-submit writes, filtered reads
//! - [`Ledger`] - The async trait for the external ledger service
//! - [`MemoryLedger`] - In-memory ledger for tests
//! - [`ClientConfig`] - Endpoint, program identity, commitment level
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chirp_client::{ClientConfig, MemoryLedger, PostClient};
//! use chirp_core::Pubkey;
//!
//! async fn example() {
//!     let config = ClientConfig::new("http://localhost:8899", Pubkey::ZERO);
//!     let client = PostClient::new(config, MemoryLedger::new());
//!
//!     let author = Pubkey::from_bytes([1; 32]);
//!     let address = client.send_post(author, "solana", "gm").await.unwrap();
//!
//!     let posts = client.posts_by_author(&author).await.unwrap();
//!     assert_eq!(posts[0].0, address);
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod ledger;
pub mod memory;

pub use client::{decode_accounts, PostClient};
pub use config::{ClientConfig, Commitment};
pub use error::{ClientError, LedgerError, Result};
pub use ledger::{Ledger, PostRequest};
pub use memory::MemoryLedger;
