//! Solana public key (address) helpers.
//!
//! Wraps `solana_sdk::pubkey::Pubkey` with checked constructors and the
//! well-known addresses used by the Move loader.

use crate::error::WasmMoveLoaderError;
use std::str::FromStr;

/// Re-export the underlying Solana Pubkey type.
pub use solana_sdk::pubkey::Pubkey;

/// Size of an encoded address in bytes.
pub const PUBKEY_BYTES: usize = 32;

/// Move loader program ID.
pub const MOVE_LOADER_PROGRAM_ID: &str = "MoveLdr111111111111111111111111111111111111";

/// Libra's mint account address is all zeros, structurally equivalent
/// to a Solana public key.
pub const MINT_ADDRESS: &str = "11111111111111111111111111111111";

/// Returns the implicit sender of mint operations.
pub fn mint_address() -> Pubkey {
    Pubkey::new_from_array([0u8; PUBKEY_BYTES])
}

/// Returns the Move loader program ID.
pub fn move_loader_program_id() -> Result<Pubkey, WasmMoveLoaderError> {
    Pubkey::from_base58(MOVE_LOADER_PROGRAM_ID)
}

/// Extension trait for Pubkey to add WASM-friendly error handling.
pub trait PubkeyExt {
    fn from_base58(address: &str) -> Result<Pubkey, WasmMoveLoaderError>;
    fn from_bytes_checked(bytes: &[u8]) -> Result<Pubkey, WasmMoveLoaderError>;
}

impl PubkeyExt for Pubkey {
    /// Create a Pubkey from a base58 string.
    fn from_base58(address: &str) -> Result<Pubkey, WasmMoveLoaderError> {
        Pubkey::from_str(address)
            .map_err(|e| WasmMoveLoaderError::encode(format!("Invalid base58: {}", e)))
    }

    /// Create a Pubkey from a byte slice with length validation.
    fn from_bytes_checked(bytes: &[u8]) -> Result<Pubkey, WasmMoveLoaderError> {
        let array: [u8; PUBKEY_BYTES] = bytes.try_into().map_err(|_| {
            WasmMoveLoaderError::encode(format!(
                "Invalid public key length: expected {} bytes, got {}",
                PUBKEY_BYTES,
                bytes.len()
            ))
        })?;

        Ok(Pubkey::new_from_array(array))
    }
}
