//! # Chirp Testkit
//!
//! Testing utilities for Chirp.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Generators**: proptest strategies over valid topics, contents,
//!   identities, and whole posts
//! - **Fixtures**: a ready-made client over an in-memory ledger with a
//!   fixed clock
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use chirp_testkit::generators::post;
//!
//! proptest! {
//!     #[test]
//!     fn codec_roundtrips(p in post()) {
//!         let bytes = chirp_core::encode(&p);
//!         prop_assert_eq!(chirp_core::decode(&bytes).unwrap(), p);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use chirp_testkit::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let author = fixture.author(1);
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{TestFixture, FIXTURE_CLOCK};
