//! Instructions for the Libra payment flows.
//!
//! Each function wraps codec output in a Move loader `Instruction` with the
//! account ordering the loader expects. Signing and submission are left to
//! the caller.

use crate::config::LoaderConfig;
use crate::error::WasmMoveLoaderError;
use crate::instruction_data::{self, ScriptArgs};
use crate::loader::MoveLoader;
use crate::pubkey::Pubkey;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_system_interface::instruction as system_ix;

/// Create a new account owned by the Move loader.
pub fn create_account(
    payer: &Pubkey,
    new_account: &Pubkey,
    space: u64,
    config: &LoaderConfig,
) -> Result<Instruction, WasmMoveLoaderError> {
    Ok(system_ix::create_account(
        payer,
        new_account,
        config.account_lamports,
        space,
        &MoveLoader::program_id()?,
    ))
}

/// Create an account sized for a Libra user.
pub fn create_user_account(
    payer: &Pubkey,
    new_account: &Pubkey,
    config: &LoaderConfig,
) -> Result<Instruction, WasmMoveLoaderError> {
    create_account(payer, new_account, config.user_account_size, config)
}

/// Create an account sized for the Libra genesis state.
pub fn create_genesis_account(
    payer: &Pubkey,
    genesis: &Pubkey,
    config: &LoaderConfig,
) -> Result<Instruction, WasmMoveLoaderError> {
    create_account(payer, genesis, config.genesis_account_size, config)
}

/// Populate a genesis account with `microlibras`.
///
/// Accounts: [genesis (signer, writable)]
pub fn create_genesis(genesis: &Pubkey, microlibras: u64) -> Result<Instruction, WasmMoveLoaderError> {
    Ok(Instruction::new_with_bytes(
        MoveLoader::program_id()?,
        &instruction_data::create_genesis(microlibras)?,
        vec![AccountMeta::new(*genesis, true)],
    ))
}

/// Run `function_name` of a loaded script.
///
/// Accounts: [script, genesis, sender (signer, writable), ...additional_keys]
pub fn run_script(
    script: &Pubkey,
    genesis: &Pubkey,
    sender: &Pubkey,
    additional_keys: &[AccountMeta],
    function_name: &str,
    args: &ScriptArgs,
) -> Result<Instruction, WasmMoveLoaderError> {
    let mut accounts = vec![
        AccountMeta::new_readonly(*script, false),
        AccountMeta::new_readonly(*genesis, false),
        AccountMeta::new(*sender, true),
    ];
    accounts.extend_from_slice(additional_keys);

    Ok(Instruction::new_with_bytes(
        MoveLoader::program_id()?,
        &instruction_data::run_script(sender, function_name, args)?,
        accounts,
    ))
}

/// Mint `microlibras` into `payee` with a loaded mint_to_address script.
///
/// Accounts: [script, genesis (signer, writable), payee (signer, writable)]
pub fn mint_to_address(
    script: &Pubkey,
    genesis: &Pubkey,
    payee: &Pubkey,
    microlibras: u64,
) -> Result<Instruction, WasmMoveLoaderError> {
    Ok(Instruction::new_with_bytes(
        MoveLoader::program_id()?,
        &instruction_data::run_mint_to_address(payee, microlibras)?,
        vec![
            AccountMeta::new_readonly(*script, false),
            AccountMeta::new(*genesis, true),
            AccountMeta::new(*payee, true),
        ],
    ))
}

/// Pay `microlibras` from `sender` to `payee` with a loaded pay_from_sender script.
///
/// Accounts: [script, genesis, sender (signer, writable), payee (signer, writable)]
pub fn pay_from_sender(
    script: &Pubkey,
    genesis: &Pubkey,
    sender: &Pubkey,
    payee: &Pubkey,
    microlibras: u64,
) -> Result<Instruction, WasmMoveLoaderError> {
    Ok(Instruction::new_with_bytes(
        MoveLoader::program_id()?,
        &instruction_data::run_pay_from_sender(sender, payee, microlibras)?,
        vec![
            AccountMeta::new_readonly(*script, false),
            AccountMeta::new_readonly(*genesis, false),
            AccountMeta::new(*sender, true),
            AccountMeta::new(*payee, true),
        ],
    ))
}
