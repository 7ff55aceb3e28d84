//! Instruction codec for the Move loader program.
//!
//! Encodes the commands accepted by the loader into fixed-layout buffers and
//! decodes them back, along with the balance field of Libra account data.
//!
//! # Wire Format
//!
//! All integers are little-endian. Loader instructions start with a u32 tag:
//! - 0: Write `{offset u32, len u64, bytes}`
//! - 1: Finalize
//! - 2: InvokeMain `{len u64, body}` where body starts with a u32 command:
//!   - 0: CreateGenesis `{amount u64}`
//!   - 1: RunProgram `{sender [32], name_len u64, name, args...}`

mod decode;
mod encode;
mod try_into_js_value;
mod types;

pub use decode::{
    decode_balance, decode_instruction_data, decode_invoke_command, decode_program,
    decode_transaction_arguments, parse_instruction_data,
};
pub use encode::{
    create_genesis, encode_program, encode_transaction_arguments, finalize, invoke_main,
    run_mint_to_address, run_pay_from_sender, run_program, run_script, write,
};
pub use types::{
    AccountType, Command, InvokeCommand, LoaderInstruction, ParsedInstruction, ProgramData,
    ScriptArgs, TransactionArgument, BALANCE_LEN, BALANCE_OFFSET, INVOKE_MAIN_HEADER_LEN,
    MAIN_FUNCTION_NAME,
};
