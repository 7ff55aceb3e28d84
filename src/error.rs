//! Error types for wasm-move-loader

use core::fmt;
use wasm_bindgen::prelude::*;

/// Main error type for wasm-move-loader operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WasmMoveLoaderError {
    /// Input has the wrong shape to be encoded (bad key length, oversized name, ...)
    EncodeError(String),
    /// Buffer is too short or malformed for the layout being read
    DecodeError(String),
    /// Loader configuration rejected
    InvalidConfig(String),
}

impl std::error::Error for WasmMoveLoaderError {}

impl fmt::Display for WasmMoveLoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WasmMoveLoaderError::EncodeError(s) => write!(f, "Encode error: {}", s),
            WasmMoveLoaderError::DecodeError(s) => write!(f, "Decode error: {}", s),
            WasmMoveLoaderError::InvalidConfig(s) => write!(f, "Invalid config: {}", s),
        }
    }
}

impl WasmMoveLoaderError {
    pub fn encode(s: impl Into<String>) -> Self {
        WasmMoveLoaderError::EncodeError(s.into())
    }

    pub fn decode(s: impl Into<String>) -> Self {
        WasmMoveLoaderError::DecodeError(s.into())
    }

    pub fn is_encode_error(&self) -> bool {
        matches!(self, WasmMoveLoaderError::EncodeError(_))
    }

    pub fn is_decode_error(&self) -> bool {
        matches!(self, WasmMoveLoaderError::DecodeError(_))
    }
}

impl From<serde_json::Error> for WasmMoveLoaderError {
    fn from(err: serde_json::Error) -> Self {
        WasmMoveLoaderError::InvalidConfig(err.to_string())
    }
}

// REQUIRED: Converts to JS Error with stack trace
impl From<WasmMoveLoaderError> for JsValue {
    fn from(err: WasmMoveLoaderError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WasmMoveLoaderError::encode("bad address");
        assert_eq!(err.to_string(), "Encode error: bad address");

        let err = WasmMoveLoaderError::decode("too short");
        assert_eq!(err.to_string(), "Decode error: too short");
    }

    #[test]
    fn test_from_serde_json() {
        let err: WasmMoveLoaderError = serde_json::from_str::<u64>("x").unwrap_err().into();
        assert!(matches!(err, WasmMoveLoaderError::InvalidConfig(_)));
        assert!(!err.is_encode_error());
        assert!(!err.is_decode_error());
    }

    #[test]
    fn test_kind_predicates() {
        assert!(WasmMoveLoaderError::encode("x").is_encode_error());
        assert!(WasmMoveLoaderError::decode("x").is_decode_error());
    }
}
