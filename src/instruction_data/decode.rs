//! Instruction data and account data decoders.

use super::encode::wire_options;
use super::types::*;
use crate::error::WasmMoveLoaderError;
use bincode::Options;

/// Decode the outer loader instruction, checking that the `InvokeMain`
/// length field matches the bytes that follow it.
pub fn decode_instruction_data(data: &[u8]) -> Result<LoaderInstruction, WasmMoveLoaderError> {
    if data.len() < 4 {
        return Err(WasmMoveLoaderError::decode(format!(
            "Instruction data too short: need at least 4 bytes, got {}",
            data.len()
        )));
    }

    let tag = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    if tag == 2 && data.len() >= INVOKE_MAIN_HEADER_LEN {
        let declared = u64::from_le_bytes([
            data[4], data[5], data[6], data[7], data[8], data[9], data[10], data[11],
        ]);
        let actual = (data.len() - INVOKE_MAIN_HEADER_LEN) as u64;
        if declared != actual {
            return Err(WasmMoveLoaderError::decode(format!(
                "InvokeMain length field is {} but {} bytes follow",
                declared, actual
            )));
        }
    }

    wire_options()
        .with_limit(data.len() as u64)
        .deserialize(data)
        .map_err(|e| WasmMoveLoaderError::decode(format!("Invalid loader instruction: {}", e)))
}

/// Decode an `InvokeMain` body.
///
/// Whatever follows the function name of a `RunProgram` body is returned as
/// [`ScriptArgs::RawArgs`]. Function names must be ASCII, as on encode.
pub fn decode_invoke_command(body: &[u8]) -> Result<InvokeCommand, WasmMoveLoaderError> {
    if body.len() < 4 {
        return Err(WasmMoveLoaderError::decode(format!(
            "Command too short: need at least 4 bytes, got {}",
            body.len()
        )));
    }

    let command = Command::from_tag(u32::from_le_bytes([body[0], body[1], body[2], body[3]]))?;
    let rest = &body[4..];

    match command {
        Command::CreateGenesis => {
            let amount: [u8; 8] = rest.try_into().map_err(|_| {
                WasmMoveLoaderError::decode(format!(
                    "CreateGenesis body must carry an 8-byte amount, got {} bytes",
                    rest.len()
                ))
            })?;
            Ok(InvokeCommand::CreateGenesis {
                amount: u64::from_le_bytes(amount),
            })
        }
        Command::RunProgram => {
            let mut reader = rest;
            let header: OwnedRunProgramHeader = wire_options()
                .with_limit(rest.len() as u64)
                .deserialize_from(&mut reader)
                .map_err(|e| {
                    WasmMoveLoaderError::decode(format!("Invalid RunProgram header: {}", e))
                })?;
            if !header.function_name.is_ascii() {
                return Err(WasmMoveLoaderError::decode(format!(
                    "Function name must be ASCII: {:?}",
                    header.function_name
                )));
            }
            let args = if reader.is_empty() {
                ScriptArgs::NoArgs
            } else {
                ScriptArgs::RawArgs(reader.to_vec())
            };
            Ok(InvokeCommand::RunProgram {
                sender_address: header.sender_address,
                function_name: header.function_name,
                args,
            })
        }
    }
}

/// Decode a loader instruction down to its command.
pub fn parse_instruction_data(data: &[u8]) -> Result<ParsedInstruction, WasmMoveLoaderError> {
    Ok(match decode_instruction_data(data)? {
        LoaderInstruction::Write { offset, bytes } => ParsedInstruction::Write { offset, bytes },
        LoaderInstruction::Finalize => ParsedInstruction::Finalize,
        LoaderInstruction::InvokeMain { data } => {
            ParsedInstruction::InvokeMain(decode_invoke_command(&data)?)
        }
    })
}

/// Decode a typed argument list: `{count u64, {tag u32, payload}...}`.
pub fn decode_transaction_arguments(
    bytes: &[u8],
) -> Result<Vec<TransactionArgument>, WasmMoveLoaderError> {
    wire_options()
        .with_limit(bytes.len() as u64)
        .deserialize(bytes)
        .map_err(|e| WasmMoveLoaderError::decode(format!("Invalid transaction arguments: {}", e)))
}

/// Decode a Move program blob: `{account_type u32, len u64, bytes}`.
pub fn decode_program(data: &[u8]) -> Result<ProgramData, WasmMoveLoaderError> {
    let payload: OwnedProgramPayload = wire_options()
        .with_limit(data.len() as u64)
        .deserialize(data)
        .map_err(|e| WasmMoveLoaderError::decode(format!("Invalid program data: {}", e)))?;
    Ok(ProgramData {
        account_type: AccountType::from_tag(payload.account_type)?,
        bytes: payload.bytes,
    })
}

/// Read the Libra balance from raw account data.
pub fn decode_balance(account_data: &[u8]) -> Result<u64, WasmMoveLoaderError> {
    let end = BALANCE_OFFSET + BALANCE_LEN;
    let field: [u8; BALANCE_LEN] = account_data
        .get(BALANCE_OFFSET..end)
        .and_then(|field| field.try_into().ok())
        .ok_or_else(|| {
            WasmMoveLoaderError::decode(format!(
                "Account data too short for balance: need at least {} bytes, got {}",
                end,
                account_data.len()
            ))
        })?;
    Ok(u64::from_le_bytes(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction_data::encode;
    use crate::pubkey::{mint_address, Pubkey, PubkeyExt};
    use proptest::prelude::*;

    const SENDER: &str = "DgT9qyYwYKBRDyDw3EfR12LHQCQjtNrKu2qMsXHuosmB";

    fn account_with_balance(amount: u64, len: usize) -> Vec<u8> {
        let mut data = vec![0xEE; len];
        data[BALANCE_OFFSET..BALANCE_OFFSET + 8].copy_from_slice(&amount.to_le_bytes());
        data
    }

    #[test]
    fn test_decode_balance() {
        assert_eq!(decode_balance(&account_with_balance(42, 173)).unwrap(), 42);
        assert_eq!(decode_balance(&account_with_balance(28, 2048)).unwrap(), 28);
        assert_eq!(
            decode_balance(&account_with_balance(u64::MAX, 173)).unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn test_decode_balance_too_short() {
        for len in [0, 1, 165, 172] {
            let err = decode_balance(&vec![0u8; len]).unwrap_err();
            assert!(err.is_decode_error(), "len {}", len);
        }
    }

    #[test]
    fn test_decode_create_genesis() {
        let data = encode::create_genesis(1_000_000).unwrap();
        let parsed = parse_instruction_data(&data).unwrap();
        assert_eq!(
            parsed,
            ParsedInstruction::InvokeMain(InvokeCommand::CreateGenesis { amount: 1_000_000 })
        );
    }

    #[test]
    fn test_decode_run_script_roundtrip() {
        let sender = Pubkey::from_base58(SENDER).unwrap();
        let data = encode::run_script(&sender, "transfer", &ScriptArgs::NoArgs).unwrap();

        match parse_instruction_data(&data).unwrap() {
            ParsedInstruction::InvokeMain(InvokeCommand::RunProgram {
                sender_address,
                function_name,
                args,
            }) => {
                assert_eq!(sender_address, sender);
                assert_eq!(function_name, "transfer");
                assert_eq!(args, ScriptArgs::NoArgs);
            }
            other => panic!("Expected RunProgram, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_run_script_raw_args() {
        let sender = Pubkey::from_base58(SENDER).unwrap();
        let args = ScriptArgs::RawArgs(vec![5, 6, 7]);
        let data = encode::run_script(&sender, "main", &args).unwrap();

        let ParsedInstruction::InvokeMain(command) = parse_instruction_data(&data).unwrap() else {
            panic!("Expected InvokeMain");
        };
        assert_eq!(
            command,
            InvokeCommand::RunProgram {
                sender_address: sender,
                function_name: "main".to_string(),
                args,
            }
        );
        assert_eq!(command.command(), Command::RunProgram);
    }

    #[test]
    fn test_decode_mint_to_address_arguments() {
        let payee = Pubkey::from_base58("FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH").unwrap();
        let data = encode::run_mint_to_address(&payee, 42).unwrap();

        let ParsedInstruction::InvokeMain(InvokeCommand::RunProgram {
            sender_address,
            function_name,
            args,
        }) = parse_instruction_data(&data).unwrap()
        else {
            panic!("Expected RunProgram");
        };
        assert_eq!(sender_address, mint_address());
        assert_eq!(function_name, "main");
        assert_eq!(
            args.to_transaction_arguments().unwrap(),
            vec![
                TransactionArgument::Address(payee),
                TransactionArgument::U64(42)
            ]
        );
    }

    #[test]
    fn test_decode_length_mismatch() {
        let mut data = encode::create_genesis(7).unwrap();
        data.push(0);
        let err = decode_instruction_data(&data).unwrap_err();
        assert!(err.is_decode_error());
        assert!(err.to_string().contains("length field is 12 but 13 bytes follow"));

        let data = encode::create_genesis(7).unwrap();
        assert!(decode_instruction_data(&data[..23]).is_err());
    }

    #[test]
    fn test_decode_unknown_tags() {
        assert!(decode_instruction_data(&[3, 0, 0, 0]).is_err());
        assert!(decode_instruction_data(&[2, 0]).is_err());
        assert!(decode_invoke_command(&[9, 0, 0, 0]).unwrap_err().is_decode_error());
    }

    #[test]
    fn test_decode_create_genesis_wrong_body() {
        let err = decode_invoke_command(&[0, 0, 0, 0, 1, 2, 3]).unwrap_err();
        assert!(err.is_decode_error());
    }

    #[test]
    fn test_decode_truncated_function_name() {
        let sender = Pubkey::from_base58(SENDER).unwrap();
        let data = encode::run_script(&sender, "main", &ScriptArgs::NoArgs).unwrap();
        // Body without the last two name bytes
        let body = &data[INVOKE_MAIN_HEADER_LEN..data.len() - 2];
        assert!(decode_invoke_command(body).unwrap_err().is_decode_error());
    }

    #[test]
    fn test_decode_non_ascii_function_name() {
        let sender = Pubkey::from_base58(SENDER).unwrap();
        let name = "main\u{e9}";

        let mut body = Vec::new();
        body.extend_from_slice(&1u32.to_le_bytes());
        body.extend_from_slice(&sender.to_bytes());
        body.extend_from_slice(&(name.len() as u64).to_le_bytes());
        body.extend_from_slice(name.as_bytes());

        let err = decode_invoke_command(&body).unwrap_err();
        assert!(err.is_decode_error());
        assert!(err.to_string().contains("ASCII"));
        assert!(encode::run_script(&sender, name, &ScriptArgs::NoArgs)
            .unwrap_err()
            .is_encode_error());
    }

    #[test]
    fn test_decode_huge_string_length_is_rejected() {
        let mut args = Vec::new();
        args.extend_from_slice(&1u64.to_le_bytes());
        args.extend_from_slice(&3u32.to_le_bytes());
        args.extend_from_slice(&u64::MAX.to_le_bytes());
        assert!(decode_transaction_arguments(&args).is_err());
    }

    #[test]
    fn test_decode_write_finalize_program() {
        let program = encode::encode_program(AccountType::CompiledScript, b"move").unwrap();
        let write = encode::write(3, &program).unwrap();
        assert_eq!(
            parse_instruction_data(&write).unwrap(),
            ParsedInstruction::Write {
                offset: 3,
                bytes: program.clone()
            }
        );
        assert_eq!(
            parse_instruction_data(&encode::finalize().unwrap()).unwrap(),
            ParsedInstruction::Finalize
        );
        assert_eq!(
            decode_program(&program).unwrap(),
            ProgramData {
                account_type: AccountType::CompiledScript,
                bytes: b"move".to_vec()
            }
        );
    }

    proptest! {
        #[test]
        fn test_balance_roundtrip(amount in any::<u64>(), extra in 0usize..64) {
            let data = account_with_balance(amount, BALANCE_OFFSET + BALANCE_LEN + extra);
            prop_assert_eq!(decode_balance(&data).unwrap(), amount);
        }

        #[test]
        fn test_short_account_data_fails(len in 0usize..173) {
            prop_assert!(decode_balance(&vec![0u8; len]).unwrap_err().is_decode_error());
        }

        #[test]
        fn test_mint_and_pay_are_116_bytes(
            sender in any::<[u8; 32]>(),
            payee in any::<[u8; 32]>(),
            amount in any::<u64>()
        ) {
            let sender = Pubkey::new_from_array(sender);
            let payee = Pubkey::new_from_array(payee);
            prop_assert_eq!(encode::run_mint_to_address(&payee, amount).unwrap().len(), 116);
            prop_assert_eq!(encode::run_pay_from_sender(&sender, &payee, amount).unwrap().len(), 116);
        }

        #[test]
        fn test_run_script_prefix_roundtrip(
            sender in any::<[u8; 32]>(),
            name in "[a-z_]{0,24}",
            args in proptest::collection::vec(any::<u8>(), 0..48)
        ) {
            let sender = Pubkey::new_from_array(sender);
            let plain = encode::run_script(&sender, &name, &ScriptArgs::NoArgs).unwrap();
            prop_assert_eq!(plain.len(), 56 + name.len());

            let with_args = encode::run_script(&sender, &name, &ScriptArgs::RawArgs(args.clone())).unwrap();
            prop_assert_eq!(with_args.len(), 56 + name.len() + args.len());

            let body = &with_args[INVOKE_MAIN_HEADER_LEN..];
            match decode_invoke_command(body).unwrap() {
                InvokeCommand::RunProgram { sender_address, function_name, args: decoded } => {
                    prop_assert_eq!(sender_address, sender);
                    prop_assert_eq!(function_name, name);
                    prop_assert_eq!(decoded.as_bytes(), &args[..]);
                }
                other => prop_assert!(false, "unexpected {:?}", other),
            }
        }
    }
}
