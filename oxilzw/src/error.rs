//! LZW-specific error types.

use crate::Code;
use thiserror::Error;

/// LZW compression/decompression errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LzwError {
    /// Code is neither a known dictionary entry nor the next expected code.
    #[error("Invalid LZW code: {0}")]
    InvalidCode(Code),

    /// Input symbol lies outside the seeded alphabet.
    #[error("Unsupported symbol {symbol:?} at position {position}")]
    UnsupportedSymbol {
        /// The offending symbol.
        symbol: char,
        /// Index of the symbol in the input.
        position: usize,
    },

    /// Alphabet size outside 1-256.
    #[error("Invalid alphabet size: {0} (must be 1-256)")]
    InvalidAlphabetSize(u16),

    /// Reporting bit width outside 1-32.
    #[error("Invalid bit width: {0} (must be 1-32)")]
    InvalidBitWidth(u8),

    /// The next code would not fit in a `Code`.
    #[error("Code space exhausted (max {max} codes)", max = Code::MAX)]
    CodeSpaceExhausted,
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;
