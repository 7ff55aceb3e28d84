//! Uploading compiled Move programs through the loader.
//!
//! A program is stored as `{account_type, bytes}`, written into its account
//! in chunks with `Write` instructions, then sealed with `Finalize`.

use crate::error::WasmMoveLoaderError;
use crate::instruction_data::{self, AccountType};
use crate::pubkey::{move_loader_program_id, Pubkey, PubkeyExt};
use solana_sdk::instruction::{AccountMeta, Instruction};

/// Rent sysvar, read by the loader when finalizing.
pub const SYSVAR_RENT: &str = "SysvarRent111111111111111111111111111111111";

/// Factory for instructions interacting with the Move loader.
pub struct MoveLoader;

impl MoveLoader {
    /// Public key that identifies the Move loader.
    pub fn program_id() -> Result<Pubkey, WasmMoveLoaderError> {
        move_loader_program_id()
    }

    /// Instruction data of each `Write` needed to load `program_bytes`, in order.
    pub fn write_chunks(
        account_type: AccountType,
        program_bytes: &[u8],
        chunk_size: usize,
    ) -> Result<Vec<Vec<u8>>, WasmMoveLoaderError> {
        if chunk_size == 0 {
            return Err(WasmMoveLoaderError::encode("Write chunk size must be non-zero"));
        }

        let payload = instruction_data::encode_program(account_type, program_bytes)?;
        payload
            .chunks(chunk_size)
            .enumerate()
            .map(|(index, chunk)| instruction_data::write(index * chunk_size, chunk))
            .collect()
    }

    /// Build the instructions loading `program_bytes` into `program`.
    ///
    /// Returns one `Write` per `chunk_size` bytes of the encoded program,
    /// followed by `Finalize`. Every instruction needs `program` to sign.
    pub fn load_instructions(
        program: &Pubkey,
        account_type: AccountType,
        program_bytes: &[u8],
        chunk_size: usize,
    ) -> Result<Vec<Instruction>, WasmMoveLoaderError> {
        let program_id = Self::program_id()?;
        let mut instructions: Vec<Instruction> =
            Self::write_chunks(account_type, program_bytes, chunk_size)?
                .into_iter()
                .map(|data| {
                    Instruction::new_with_bytes(
                        program_id,
                        &data,
                        vec![AccountMeta::new(*program, true)],
                    )
                })
                .collect();

        let rent_sysvar = Pubkey::from_base58(SYSVAR_RENT)?;
        instructions.push(Instruction::new_with_bytes(
            program_id,
            &instruction_data::finalize()?,
            vec![
                AccountMeta::new(*program, true),
                AccountMeta::new_readonly(rent_sysvar, false),
            ],
        ));

        Ok(instructions)
    }
}
