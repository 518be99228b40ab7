//! # Chirp Core
//!
//! Pure primitives for the Chirp client: the post account layout,
//! field validation, the binary codec, and offset-based filter building.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over byte buffers; every function is synchronous and
//! deterministic. Decoding independent buffers shares no state, so a
//! query result set may be decoded in parallel.
//!
//! ## Key Types
//!
//! - [`Post`] - A decoded post account
//! - [`Pubkey`] - A 32-byte identity (author or account address)
//! - [`Memcmp`] - A server-side `(offset, value)` equality filter
//!
//! ## Account Layout
//!
//! See the [`layout`] module for the exact byte layout and its offsets.

pub mod codec;
pub mod error;
pub mod filter;
pub mod layout;
pub mod post;
pub mod types;
pub mod validate;

pub use codec::{decode, encode, POST_DISCRIMINATOR};
pub use error::{DecodeError, FilterError, ValidateError};
pub use filter::{by_author, by_field, by_topic, discriminator_filter, Memcmp, PostField};
pub use post::Post;
pub use types::{ParsePubkeyError, Pubkey};
pub use validate::{validate_content, validate_topic};
