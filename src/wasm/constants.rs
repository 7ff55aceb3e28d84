//! Constants exported via WASM.
//!
//! Lets JavaScript reference the loader's well-known addresses and sizes
//! without importing @solana/web3.js.

use wasm_bindgen::prelude::*;

use crate::config::KNOWN_GENESIS_ACCOUNT_SIZES;
use crate::instruction_data::BALANCE_OFFSET;
use crate::loader::SYSVAR_RENT;
use crate::pubkey::{MINT_ADDRESS, MOVE_LOADER_PROGRAM_ID};

/// Move loader program ID
#[wasm_bindgen]
pub fn move_loader_program_id() -> String {
    MOVE_LOADER_PROGRAM_ID.to_string()
}

/// Libra mint address (all zeros)
#[wasm_bindgen]
pub fn mint_address() -> String {
    MINT_ADDRESS.to_string()
}

/// Rent sysvar address
#[wasm_bindgen]
pub fn sysvar_rent() -> String {
    SYSVAR_RENT.to_string()
}

/// Byte offset of the balance in Libra account data (165)
#[wasm_bindgen]
pub fn balance_offset() -> u32 {
    BALANCE_OFFSET as u32
}

/// Genesis account sizes of the known loader revisions.
/// Pass the one matching the deployed loader as `genesisAccountSize`.
#[wasm_bindgen]
pub fn known_genesis_account_sizes() -> Vec<u64> {
    KNOWN_GENESIS_ACCOUNT_SIZES.to_vec()
}
