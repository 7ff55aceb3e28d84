//! wasm-move-loader: instruction codec for the Solana Move loader.
//!
//! Encodes the instruction data accepted by the Move loader program (genesis
//! creation, script invocation, program upload), decodes it back, and reads
//! Libra balances out of raw account data. Transactions are assembled,
//! signed and submitted elsewhere.
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//!
//! 1. **Core** (`instruction_data`, `loader`, `librapay`, `pubkey`, `config`) - Pure Rust
//! 2. **WASM bindings** (`wasm/`) - Thin wrappers that expose the core to JavaScript
//!
//! # Usage from Rust
//!
//! ```rust
//! use wasm_move_loader::instruction_data::{create_genesis, decode_balance};
//!
//! let data = create_genesis(1_000_000).unwrap();
//! assert_eq!(data.len(), 24);
//!
//! let mut account = vec![0u8; 173];
//! account[165..].copy_from_slice(&42u64.to_le_bytes());
//! assert_eq!(decode_balance(&account).unwrap(), 42);
//! ```

pub mod config;
mod error;
pub mod instruction_data;
pub mod librapay;
pub mod loader;
pub mod pubkey;
pub mod wasm;

// Re-export core types at crate root
pub use config::LoaderConfig;
pub use error::WasmMoveLoaderError;
pub use instruction_data::{
    AccountType, InvokeCommand, LoaderInstruction, ParsedInstruction, ScriptArgs,
    TransactionArgument,
};
pub use loader::MoveLoader;
pub use pubkey::{mint_address, Pubkey, PubkeyExt};

// Re-export WASM types
pub use wasm::{MoveLoaderNamespace, WasmPubkey};
