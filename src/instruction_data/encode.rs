//! Instruction data encoders.
//!
//! Each function returns the complete buffer handed to the transaction layer.

use super::types::*;
use crate::error::WasmMoveLoaderError;
use crate::pubkey::{mint_address, Pubkey};
use bincode::Options;
use serde::Serialize;

/// Bincode configuration matching the loader's wire format.
pub(super) fn wire_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
}

fn serialize<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<Vec<u8>, WasmMoveLoaderError> {
    wire_options()
        .serialize(value)
        .map_err(|e| WasmMoveLoaderError::encode(format!("Failed to encode {}: {}", what, e)))
}

/// Wrap an already encoded command body in an `InvokeMain` instruction.
pub fn invoke_main(body: Vec<u8>) -> Result<Vec<u8>, WasmMoveLoaderError> {
    let body_len = body.len();
    u64::try_from(body_len).map_err(|_| {
        WasmMoveLoaderError::encode(format!("Command body too large: {} bytes", body_len))
    })?;

    let buffer = serialize(&LoaderInstruction::InvokeMain { data: body }, "InvokeMain")?;
    debug_assert_eq!(buffer.len(), INVOKE_MAIN_HEADER_LEN + body_len);
    Ok(buffer)
}

/// Instruction data to create a genesis account holding `amount` microlibras.
///
/// ```text
/// [0:4)   instruction = 2 (InvokeMain)
/// [4:12)  length = 12
/// [12:16) command = 0 (CreateGenesis)
/// [16:24) amount
/// ```
pub fn create_genesis(amount: u64) -> Result<Vec<u8>, WasmMoveLoaderError> {
    let body = serialize(
        &CreateGenesisBody {
            command: Command::CreateGenesis as u32,
            amount,
        },
        "CreateGenesis",
    )?;
    invoke_main(body)
}

/// Instruction data to run `function_name` of a loaded script as `sender_address`.
///
/// Raw `args` are appended verbatim after the function name and counted in
/// the length field.
pub fn run_script(
    sender_address: &Pubkey,
    function_name: &str,
    args: &ScriptArgs,
) -> Result<Vec<u8>, WasmMoveLoaderError> {
    if !function_name.is_ascii() {
        return Err(WasmMoveLoaderError::encode(format!(
            "Function name must be ASCII: {:?}",
            function_name
        )));
    }

    let mut body = serialize(
        &RunProgramHeader {
            command: Command::RunProgram as u32,
            sender_address,
            function_name,
        },
        "RunProgram",
    )?;
    body.extend_from_slice(args.as_bytes());
    invoke_main(body)
}

/// Same as [`run_script`] with a typed argument list.
pub fn run_program(
    sender_address: &Pubkey,
    function_name: &str,
    args: &[TransactionArgument],
) -> Result<Vec<u8>, WasmMoveLoaderError> {
    run_script(sender_address, function_name, &ScriptArgs::typed(args)?)
}

/// Instruction data to call the mint_to_address Move program.
pub fn run_mint_to_address(payee_address: &Pubkey, amount: u64) -> Result<Vec<u8>, WasmMoveLoaderError> {
    run_pay_from_sender(&mint_address(), payee_address, amount)
}

/// Instruction data to call the pay_from_sender Move program.
pub fn run_pay_from_sender(
    sender_address: &Pubkey,
    payee_address: &Pubkey,
    amount: u64,
) -> Result<Vec<u8>, WasmMoveLoaderError> {
    run_program(
        sender_address,
        MAIN_FUNCTION_NAME,
        &[
            TransactionArgument::Address(*payee_address),
            TransactionArgument::U64(amount),
        ],
    )
}

/// Encode a typed argument list: `{count u64, {tag u32, payload}...}`.
pub fn encode_transaction_arguments(
    args: &[TransactionArgument],
) -> Result<Vec<u8>, WasmMoveLoaderError> {
    serialize(args, "transaction arguments")
}

// =============================================================================
// Program upload
// =============================================================================

/// Encode a compiled Move program as stored by the loader.
pub fn encode_program(account_type: AccountType, bytes: &[u8]) -> Result<Vec<u8>, WasmMoveLoaderError> {
    serialize(
        &ProgramPayload {
            account_type: account_type as u32,
            bytes,
        },
        "program",
    )
}

/// Instruction data writing `bytes` at `offset` of a program account.
pub fn write(offset: usize, bytes: &[u8]) -> Result<Vec<u8>, WasmMoveLoaderError> {
    let offset = u32::try_from(offset).map_err(|_| {
        WasmMoveLoaderError::encode(format!("Write offset exceeds u32: {}", offset))
    })?;
    serialize(
        &LoaderInstruction::Write {
            offset,
            bytes: bytes.to_vec(),
        },
        "Write",
    )
}

/// Instruction data finalizing a program account.
pub fn finalize() -> Result<Vec<u8>, WasmMoveLoaderError> {
    serialize(&LoaderInstruction::Finalize, "Finalize")
}
