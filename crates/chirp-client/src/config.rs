//! Client configuration.
//!
//! The configuration is an explicitly passed value, never process-wide
//! state: multiple clients with different endpoints or commitment
//! levels can coexist in one process (and in one test binary).

use serde::{Deserialize, Serialize};

use chirp_core::Pubkey;

/// How settled a ledger state the client is willing to read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    /// Most recent state; may be rolled back.
    #[default]
    Processed,
    /// Voted on by a supermajority.
    Confirmed,
    /// Finalized, will not be rolled back.
    Finalized,
}

/// Connection parameters for a Chirp client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// URL of the ledger's RPC endpoint.
    pub cluster_url: String,

    /// Identity of the on-chain post program.
    pub program_id: Pubkey,

    /// Commitment level for reads and preflight checks.
    pub commitment: Commitment,
}

impl ClientConfig {
    /// Create a config with the default commitment level.
    pub fn new(cluster_url: impl Into<String>, program_id: Pubkey) -> Self {
        Self {
            cluster_url: cluster_url.into(),
            program_id,
            commitment: Commitment::default(),
        }
    }

    /// Override the commitment level.
    pub fn with_commitment(mut self, commitment: Commitment) -> Self {
        self.commitment = commitment;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_commitment_is_processed() {
        let config = ClientConfig::new("http://localhost:8899", Pubkey::ZERO);
        assert_eq!(config.commitment, Commitment::Processed);
    }

    #[test]
    fn test_with_commitment() {
        let config = ClientConfig::new("https://api.devnet.example", Pubkey::ZERO)
            .with_commitment(Commitment::Finalized);
        assert_eq!(config.commitment, Commitment::Finalized);
    }

    #[test]
    fn test_config_serde() {
        let config = ClientConfig::new("http://localhost:8899", Pubkey::from_bytes([7; 32]))
            .with_commitment(Commitment::Confirmed);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"confirmed\""));
        let back: ClientConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
