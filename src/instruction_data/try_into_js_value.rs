//! TryIntoJsValue implementations for decoded loader instructions.
//!
//! Addresses become base58 strings, raw bytes become hex strings and u64
//! amounts become BigInts.

use crate::js_obj;
use crate::wasm::try_into_js_value::{JsConversionError, TryIntoJsValue};
use wasm_bindgen::JsValue;

use super::types::*;

impl TryIntoJsValue for TransactionArgument {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        match self {
            TransactionArgument::U64(value) => js_obj!("type" => "U64", "value" => *value),
            TransactionArgument::Address(address) => {
                js_obj!("type" => "Address", "value" => address.to_string())
            }
            TransactionArgument::ByteArray(bytes) => {
                js_obj!("type" => "ByteArray", "value" => hex::encode(bytes))
            }
            TransactionArgument::String(s) => js_obj!("type" => "String", "value" => *s),
        }
    }
}

impl TryIntoJsValue for InvokeCommand {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        match self {
            InvokeCommand::CreateGenesis { amount } => js_obj!(
                "type" => Command::CreateGenesis.as_str(),
                "amount" => *amount
            ),
            InvokeCommand::RunProgram {
                sender_address,
                function_name,
                args,
            } => {
                // Typed arguments when the trailing bytes parse as a list
                let arguments = match args {
                    ScriptArgs::NoArgs => None,
                    ScriptArgs::RawArgs(_) => args.to_transaction_arguments().ok(),
                };
                js_obj!(
                    "type" => Command::RunProgram.as_str(),
                    "senderAddress" => sender_address.to_string(),
                    "functionName" => *function_name,
                    "args" => hex::encode(args.as_bytes()),
                    "arguments" => arguments
                )
            }
        }
    }
}

impl TryIntoJsValue for ParsedInstruction {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        match self {
            ParsedInstruction::Write { offset, bytes } => js_obj!(
                "type" => "Write",
                "offset" => *offset,
                "bytes" => hex::encode(bytes)
            ),
            ParsedInstruction::Finalize => js_obj!("type" => "Finalize"),
            ParsedInstruction::InvokeMain(command) => command.try_to_js_value(),
        }
    }
}

impl TryIntoJsValue for ProgramData {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        js_obj!(
            "accountType" => self.account_type.as_str(),
            "bytes" => hex::encode(&self.bytes)
        )
    }
}
