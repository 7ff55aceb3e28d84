//! Typed records for the Move loader's instruction data.
//!
//! Every record maps to its wire layout through serde field order, and is
//! serialized with bincode's fixed-int encoding: u32 enum tags, u64 length
//! prefixes, fixed arrays without prefix, all little-endian.

use crate::error::WasmMoveLoaderError;
use crate::pubkey::Pubkey;
use serde::{Deserialize, Serialize};

/// Size of the `{instruction u32, length u64}` header preceding an `InvokeMain` body.
pub const INVOKE_MAIN_HEADER_LEN: usize = 4 + 8;

/// Function name of the entry point of compiled Move scripts.
pub const MAIN_FUNCTION_NAME: &str = "main";

/// Byte offset of the balance field in a Libra account's data.
/// The offset belongs to the on-chain account layout and may change with it.
pub const BALANCE_OFFSET: usize = 165;

/// Width of the balance field.
pub const BALANCE_LEN: usize = 8;

/// Outer dispatch of the loader program.
///
/// `Write` and `Finalize` upload program data, `InvokeMain` wraps an
/// [`InvokeCommand`] body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoaderInstruction {
    /// Write program data chunk at `offset`. Tag 0.
    Write { offset: u32, bytes: Vec<u8> },
    /// Finalize a program. Tag 1.
    Finalize,
    /// Invoke a program. Tag 2.
    InvokeMain { data: Vec<u8> },
}

impl LoaderInstruction {
    pub fn tag(&self) -> u32 {
        match self {
            Self::Write { .. } => 0,
            Self::Finalize => 1,
            Self::InvokeMain { .. } => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Write { .. } => "Write",
            Self::Finalize => "Finalize",
            Self::InvokeMain { .. } => "InvokeMain",
        }
    }
}

/// Loader-level action selected by an `InvokeMain` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Command {
    /// Create genesis account
    CreateGenesis = 0,
    /// Run a program
    RunProgram = 1,
}

impl Command {
    pub fn from_tag(tag: u32) -> Result<Self, WasmMoveLoaderError> {
        match tag {
            0 => Ok(Self::CreateGenesis),
            1 => Ok(Self::RunProgram),
            _ => Err(WasmMoveLoaderError::decode(format!(
                "Unknown Move loader command: {}",
                tag
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateGenesis => "CreateGenesis",
            Self::RunProgram => "RunProgram",
        }
    }
}

/// Decoded body of an `InvokeMain` instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeCommand {
    CreateGenesis {
        amount: u64,
    },
    RunProgram {
        sender_address: Pubkey,
        function_name: String,
        args: ScriptArgs,
    },
}

impl InvokeCommand {
    pub fn command(&self) -> Command {
        match self {
            Self::CreateGenesis { .. } => Command::CreateGenesis,
            Self::RunProgram { .. } => Command::RunProgram,
        }
    }
}

/// Fully decoded loader instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInstruction {
    Write { offset: u32, bytes: Vec<u8> },
    Finalize,
    InvokeMain(InvokeCommand),
}

/// Trailing bytes of a `RunProgram` body, appended verbatim after the function name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScriptArgs {
    #[default]
    NoArgs,
    RawArgs(Vec<u8>),
}

impl ScriptArgs {
    /// Encode a typed argument list: `{count u64, {tag u32, payload}...}`.
    pub fn typed(args: &[TransactionArgument]) -> Result<Self, WasmMoveLoaderError> {
        let bytes = super::encode::encode_transaction_arguments(args)?;
        Ok(Self::RawArgs(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::NoArgs => &[],
            Self::RawArgs(bytes) => bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Interpret the trailing bytes as a typed argument list.
    pub fn to_transaction_arguments(&self) -> Result<Vec<TransactionArgument>, WasmMoveLoaderError> {
        match self {
            Self::NoArgs => Ok(Vec::new()),
            Self::RawArgs(bytes) => super::decode::decode_transaction_arguments(bytes),
        }
    }
}

impl From<Option<Vec<u8>>> for ScriptArgs {
    fn from(args: Option<Vec<u8>>) -> Self {
        match args {
            Some(bytes) => Self::RawArgs(bytes),
            None => Self::NoArgs,
        }
    }
}

/// One typed argument passed to an on-chain script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionArgument {
    /// Tag 0, 8-byte little-endian payload.
    U64(u64),
    /// Tag 1, 32-byte payload.
    Address(Pubkey),
    /// Tag 2, u64 length + bytes.
    ByteArray(Vec<u8>),
    /// Tag 3, u64 length + UTF-8 bytes.
    String(String),
}

impl TransactionArgument {
    pub fn tag(&self) -> u32 {
        match self {
            Self::U64(_) => 0,
            Self::Address(_) => 1,
            Self::ByteArray(_) => 2,
            Self::String(_) => 3,
        }
    }
}

/// Kind of compiled program blob uploaded to a loader account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum AccountType {
    CompiledScript = 1,
    CompiledModule = 2,
}

impl AccountType {
    pub fn from_tag(tag: u32) -> Result<Self, WasmMoveLoaderError> {
        match tag {
            1 => Ok(Self::CompiledScript),
            2 => Ok(Self::CompiledModule),
            _ => Err(WasmMoveLoaderError::decode(format!(
                "Unknown account type: {}",
                tag
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompiledScript => "CompiledScript",
            Self::CompiledModule => "CompiledModule",
        }
    }
}

/// Move program blob as stored by the loader: `{account_type u32, len u64, bytes}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramData {
    pub account_type: AccountType,
    pub bytes: Vec<u8>,
}

// =============================================================================
// Wire records
// =============================================================================

#[derive(Serialize)]
pub(super) struct CreateGenesisBody {
    pub command: u32,
    pub amount: u64,
}

#[derive(Serialize)]
pub(super) struct RunProgramHeader<'a> {
    pub command: u32,
    pub sender_address: &'a Pubkey,
    pub function_name: &'a str,
}

#[derive(Deserialize)]
pub(super) struct OwnedRunProgramHeader {
    pub sender_address: Pubkey,
    pub function_name: String,
}

#[derive(Serialize)]
pub(super) struct ProgramPayload<'a> {
    pub account_type: u32,
    pub bytes: &'a [u8],
}

#[derive(Deserialize)]
pub(super) struct OwnedProgramPayload {
    pub account_type: u32,
    pub bytes: Vec<u8>,
}
