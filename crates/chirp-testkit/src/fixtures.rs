//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use chirp_client::{ClientConfig, MemoryLedger, PostClient};
use chirp_core::Pubkey;

/// The clock reading used by fixture ledgers, in unix seconds.
pub const FIXTURE_CLOCK: i64 = 1_700_000_000;

/// A test fixture bundling a client over an in-memory ledger with a
/// fixed clock, plus deterministic author identities.
pub struct TestFixture {
    pub client: PostClient<MemoryLedger>,
}

impl TestFixture {
    /// Create a fixture with the default program identity.
    pub fn new() -> Self {
        let config = ClientConfig::new("http://localhost:8899", Pubkey::from_bytes([0xc4; 32]));
        Self {
            client: PostClient::new(config, MemoryLedger::with_fixed_clock(FIXTURE_CLOCK)),
        }
    }

    /// A deterministic author identity for index `i`.
    pub fn author(&self, i: u8) -> Pubkey {
        let mut bytes = [0u8; 32];
        bytes[0] = i;
        bytes[31] = i;
        Pubkey::from_bytes(bytes)
    }

    /// Direct access to the underlying ledger, for planting raw bytes.
    pub fn ledger(&self) -> &MemoryLedger {
        self.client.ledger()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
