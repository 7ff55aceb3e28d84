//! Account sizing configuration for Move loader accounts.

use crate::error::WasmMoveLoaderError;
use serde::{Deserialize, Serialize};

/// Genesis account size used by one revision of the Move loader.
pub const GENESIS_ACCOUNT_SIZE_9377: u64 = 9377;

/// Genesis account size used by another revision of the Move loader.
pub const GENESIS_ACCOUNT_SIZE_5176: u64 = 5176;

/// Both genesis account sizes seen in the wild. Which one applies depends on
/// the deployed loader, so the caller has to choose.
pub const KNOWN_GENESIS_ACCOUNT_SIZES: [u64; 2] =
    [GENESIS_ACCOUNT_SIZE_9377, GENESIS_ACCOUNT_SIZE_5176];

/// Program bytes carried by each Write: PACKET_DATA_SIZE (1232) minus room
/// for the transaction envelope.
pub const DEFAULT_WRITE_CHUNK_SIZE: usize = 1232 - 300;

/// Settings for creating and loading Move loader accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderConfig {
    /// Space allocated for a genesis account. Required, no default.
    pub genesis_account_size: u64,
    /// Space allocated for a user account (default: 2048, a generous estimate)
    #[serde(default = "default_user_account_size")]
    pub user_account_size: u64,
    /// Lamports funding each new account (default: 5000, enough to cover rent)
    #[serde(default = "default_account_lamports")]
    pub account_lamports: u64,
    /// Program bytes carried by each Write instruction (default: 932)
    #[serde(default = "default_write_chunk_size")]
    pub write_chunk_size: usize,
}

fn default_user_account_size() -> u64 {
    2048
}

fn default_account_lamports() -> u64 {
    5000
}

fn default_write_chunk_size() -> usize {
    DEFAULT_WRITE_CHUNK_SIZE
}

impl LoaderConfig {
    pub fn new(genesis_account_size: u64) -> Result<Self, WasmMoveLoaderError> {
        let config = Self {
            genesis_account_size,
            user_account_size: default_user_account_size(),
            account_lamports: default_account_lamports(),
            write_chunk_size: default_write_chunk_size(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse from a JSON object with camelCase keys.
    pub fn from_json(json: &str) -> Result<Self, WasmMoveLoaderError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), WasmMoveLoaderError> {
        if self.genesis_account_size == 0 {
            return Err(WasmMoveLoaderError::InvalidConfig(
                "genesisAccountSize must be non-zero".to_string(),
            ));
        }
        if self.write_chunk_size == 0 {
            return Err(WasmMoveLoaderError::InvalidConfig(
                "writeChunkSize must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the genesis size is one of the known loader revisions.
    pub fn is_known_genesis_size(&self) -> bool {
        KNOWN_GENESIS_ACCOUNT_SIZES.contains(&self.genesis_account_size)
    }
}
