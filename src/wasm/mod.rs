mod constants;
mod move_loader;
mod pubkey;
pub mod try_into_js_value;

pub use move_loader::MoveLoaderNamespace;
pub use pubkey::WasmPubkey;

// Re-export constants functions
pub use constants::*;
