//! WASM bindings for Solana public key (address) operations.

use crate::error::WasmMoveLoaderError;
use crate::pubkey::{Pubkey, PubkeyExt};
use wasm_bindgen::prelude::*;

/// WASM wrapper for Solana public key (address).
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct WasmPubkey {
    inner: Pubkey,
}

#[wasm_bindgen]
impl WasmPubkey {
    /// Create a Pubkey from a base58 string.
    #[wasm_bindgen]
    pub fn from_base58(address: &str) -> Result<WasmPubkey, WasmMoveLoaderError> {
        Pubkey::from_base58(address).map(|inner| WasmPubkey { inner })
    }

    /// Create a Pubkey from raw bytes (32 bytes).
    #[wasm_bindgen]
    pub fn from_bytes(bytes: &[u8]) -> Result<WasmPubkey, WasmMoveLoaderError> {
        Pubkey::from_bytes_checked(bytes).map(|inner| WasmPubkey { inner })
    }

    /// The Libra mint address (all zeros).
    #[wasm_bindgen]
    pub fn mint() -> WasmPubkey {
        WasmPubkey {
            inner: crate::pubkey::mint_address(),
        }
    }

    /// Convert to base58 string (the standard Solana address format).
    #[wasm_bindgen]
    pub fn to_base58(&self) -> String {
        self.inner.to_string()
    }

    /// Get as raw bytes (32 bytes).
    #[wasm_bindgen]
    pub fn to_bytes(&self) -> js_sys::Uint8Array {
        let bytes = self.inner.to_bytes();
        js_sys::Uint8Array::from(&bytes[..])
    }

    /// Whether this is the Libra mint address, the sender of mint scripts.
    #[wasm_bindgen]
    pub fn is_mint(&self) -> bool {
        self.inner == crate::pubkey::mint_address()
    }

    /// Check if two pubkeys are equal.
    #[wasm_bindgen]
    pub fn equals(&self, other: &WasmPubkey) -> bool {
        self.inner == other.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pubkey::{MINT_ADDRESS, MOVE_LOADER_PROGRAM_ID};

    #[test]
    fn test_mint_pubkey() {
        let mint = WasmPubkey::mint();
        assert_eq!(mint.to_base58(), MINT_ADDRESS);
        assert!(mint.is_mint());
        assert!(mint.equals(&WasmPubkey::from_bytes(&[0u8; 32]).unwrap()));
    }

    #[test]
    fn test_from_base58_roundtrip() {
        let loader = WasmPubkey::from_base58(MOVE_LOADER_PROGRAM_ID).unwrap();
        assert_eq!(loader.to_base58(), MOVE_LOADER_PROGRAM_ID);
        assert!(!loader.is_mint());
        assert!(!loader.equals(&WasmPubkey::mint()));
    }

    #[test]
    fn test_from_bytes_rejects_wrong_length() {
        assert!(WasmPubkey::from_bytes(&[0u8; 31]).unwrap_err().is_encode_error());
        assert!(WasmPubkey::from_base58("not-a-key").unwrap_err().is_encode_error());
    }
}
