//! WASM bindings for the Move loader instruction codec.

use crate::config::{LoaderConfig, DEFAULT_WRITE_CHUNK_SIZE};
use crate::error::WasmMoveLoaderError;
use crate::instruction_data::{self, AccountType, ScriptArgs};
use crate::loader::MoveLoader;
use crate::pubkey::{Pubkey, PubkeyExt};
use crate::wasm::try_into_js_value::TryIntoJsValue;
use wasm_bindgen::prelude::*;

/// Namespace for Move loader instruction data.
#[wasm_bindgen]
pub struct MoveLoaderNamespace;

#[wasm_bindgen]
impl MoveLoaderNamespace {
    /// Instruction data to create a genesis account holding `amount` microlibras.
    ///
    /// @param amount - Microlibras (bigint)
    /// @returns 24-byte instruction data
    #[wasm_bindgen]
    pub fn create_genesis(amount: u64) -> Result<Vec<u8>, WasmMoveLoaderError> {
        instruction_data::create_genesis(amount)
    }

    /// Instruction data to run a function of a loaded script.
    ///
    /// @param sender_address - Sender public key (32 bytes)
    /// @param function_name - ASCII function name
    /// @param args - Optional raw argument bytes appended after the name
    #[wasm_bindgen]
    pub fn run_script(
        sender_address: &[u8],
        function_name: &str,
        args: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, WasmMoveLoaderError> {
        let sender = Pubkey::from_bytes_checked(sender_address)?;
        instruction_data::run_script(&sender, function_name, &ScriptArgs::from(args))
    }

    /// Instruction data to call the mint_to_address Move program.
    #[wasm_bindgen]
    pub fn run_mint_to_address(
        payee_address: &[u8],
        amount: u64,
    ) -> Result<Vec<u8>, WasmMoveLoaderError> {
        let payee = Pubkey::from_bytes_checked(payee_address)?;
        instruction_data::run_mint_to_address(&payee, amount)
    }

    /// Instruction data to call the pay_from_sender Move program.
    #[wasm_bindgen]
    pub fn run_pay_from_sender(
        sender_address: &[u8],
        payee_address: &[u8],
        amount: u64,
    ) -> Result<Vec<u8>, WasmMoveLoaderError> {
        let sender = Pubkey::from_bytes_checked(sender_address)?;
        let payee = Pubkey::from_bytes_checked(payee_address)?;
        instruction_data::run_pay_from_sender(&sender, &payee, amount)
    }

    /// Read the Libra balance from raw account data.
    ///
    /// @param account_data - Account data, at least 173 bytes
    /// @returns The balance (bigint)
    #[wasm_bindgen]
    pub fn decode_balance(account_data: &[u8]) -> Result<u64, WasmMoveLoaderError> {
        instruction_data::decode_balance(account_data)
    }

    /// Decode loader instruction data.
    ///
    /// Returns an object with a `type` field: "Write", "Finalize",
    /// "CreateGenesis" or "RunProgram".
    #[wasm_bindgen]
    pub fn parse_instruction_data(bytes: &[u8]) -> Result<JsValue, JsValue> {
        let parsed = instruction_data::parse_instruction_data(bytes)?;
        Ok(parsed.try_to_js_value()?)
    }

    /// Encode a compiled Move program as stored by the loader.
    ///
    /// @param account_type - 1 (CompiledScript) or 2 (CompiledModule)
    /// @param program_bytes - Compiled Move bytecode
    /// @returns `{account_type u32, len u64, bytes}`
    #[wasm_bindgen]
    pub fn encode_program(
        account_type: u32,
        program_bytes: &[u8],
    ) -> Result<Vec<u8>, WasmMoveLoaderError> {
        instruction_data::encode_program(AccountType::from_tag(account_type)?, program_bytes)
    }

    /// Decode an encoded program into `{ accountType, bytes }` (bytes as hex).
    #[wasm_bindgen]
    pub fn decode_program(data: &[u8]) -> Result<JsValue, JsValue> {
        let program = instruction_data::decode_program(data)?;
        Ok(program.try_to_js_value()?)
    }

    /// Instruction data writing `bytes` at `offset` of a program account.
    #[wasm_bindgen]
    pub fn write(offset: u32, bytes: &[u8]) -> Result<Vec<u8>, WasmMoveLoaderError> {
        instruction_data::write(offset as usize, bytes)
    }

    /// Instruction data for each Write needed to load a program, in order.
    /// Follow them with `finalize()`.
    ///
    /// @param account_type - 1 (CompiledScript) or 2 (CompiledModule)
    /// @param program_bytes - Compiled Move bytecode
    /// @param chunk_size - Program bytes per Write (default: 932)
    #[wasm_bindgen]
    pub fn write_chunks(
        account_type: u32,
        program_bytes: &[u8],
        chunk_size: Option<u32>,
    ) -> Result<js_sys::Array, JsValue> {
        let chunks = js_sys::Array::new();
        for data in Self::write_chunk_data(account_type, program_bytes, chunk_size)? {
            chunks.push(&js_sys::Uint8Array::from(&data[..]));
        }
        Ok(chunks)
    }

    /// Validate a LoaderConfig object and fill in its defaults.
    ///
    /// @param config - `{ genesisAccountSize, userAccountSize?, accountLamports?, writeChunkSize? }`
    /// @returns The complete config
    #[wasm_bindgen]
    pub fn loader_config(config: JsValue) -> Result<JsValue, JsValue> {
        let config: LoaderConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| WasmMoveLoaderError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        serde_wasm_bindgen::to_value(&config)
            .map_err(|e| JsValue::from_str(&format!("Failed to convert loader config: {}", e)))
    }

    /// Instruction data finalizing a loaded program.
    #[wasm_bindgen]
    pub fn finalize() -> Result<Vec<u8>, WasmMoveLoaderError> {
        instruction_data::finalize()
    }
}

impl MoveLoaderNamespace {
    fn write_chunk_data(
        account_type: u32,
        program_bytes: &[u8],
        chunk_size: Option<u32>,
    ) -> Result<Vec<Vec<u8>>, WasmMoveLoaderError> {
        let chunk_size = chunk_size.map_or(DEFAULT_WRITE_CHUNK_SIZE, |size| size as usize);
        MoveLoader::write_chunks(AccountType::from_tag(account_type)?, program_bytes, chunk_size)
    }
}

// Run with: `wasm-pack test --node`
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_run_script_rejects_short_address() {
        assert!(MoveLoaderNamespace::run_script(&[0u8; 31], "main", None).is_err());
        let data = MoveLoaderNamespace::run_script(&[0u8; 32], "main", Some(vec![1, 2])).unwrap();
        assert_eq!(data.len(), 56 + 4 + 2);
    }

    #[wasm_bindgen_test]
    fn test_parse_instruction_data_object() {
        let data = MoveLoaderNamespace::create_genesis(1_000_000).unwrap();
        let parsed = MoveLoaderNamespace::parse_instruction_data(&data).unwrap();
        let ty = js_sys::Reflect::get(&parsed, &JsValue::from_str("type")).unwrap();
        assert_eq!(ty.as_string().unwrap(), "CreateGenesis");
    }

    #[wasm_bindgen_test]
    fn test_decode_program_object() {
        let data = MoveLoaderNamespace::encode_program(2, b"mod").unwrap();
        let program = MoveLoaderNamespace::decode_program(&data).unwrap();
        let ty = js_sys::Reflect::get(&program, &JsValue::from_str("accountType")).unwrap();
        assert_eq!(ty.as_string().unwrap(), "CompiledModule");
    }

    #[wasm_bindgen_test]
    fn test_write_chunks_array() {
        let chunks = MoveLoaderNamespace::write_chunks(1, &[0u8; 4], Some(8)).unwrap();
        // 16 payload bytes in chunks of 8
        assert_eq!(chunks.length(), 2);
    }

    #[wasm_bindgen_test]
    fn test_loader_config_defaults() {
        let config = js_sys::Object::new();
        js_sys::Reflect::set(
            &config,
            &JsValue::from_str("genesisAccountSize"),
            &JsValue::from_f64(9377.0),
        )
        .unwrap();

        let full = MoveLoaderNamespace::loader_config(config.into()).unwrap();
        let chunk = js_sys::Reflect::get(&full, &JsValue::from_str("writeChunkSize")).unwrap();
        assert_eq!(chunk.as_f64(), Some(932.0));
        assert!(MoveLoaderNamespace::loader_config(js_sys::Object::new().into()).is_err());
    }
}
