//! LZW configuration (seed alphabet and reporting code width).

use crate::Code;
use crate::error::{LzwError, Result};

/// LZW configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Number of single-symbol seed entries (1-256).
    /// Seed code `n` is the symbol with ordinal `n`.
    pub alphabet_size: u16,
    /// Assumed width of one code in bits, used only for ratio reporting.
    pub code_bits: u8,
}

impl LzwConfig {
    /// Full byte alphabet.
    ///
    /// - 256 seed codes (0-255)
    /// - First dictionary code is 256
    /// - 12-bit reporting width
    pub const BYTE: Self = Self {
        alphabet_size: 256,
        code_bits: 12,
    };

    /// 7-bit ASCII alphabet.
    ///
    /// - 128 seed codes (0-127)
    /// - First dictionary code is 128
    /// - 12-bit reporting width
    pub const ASCII: Self = Self {
        alphabet_size: 128,
        code_bits: 12,
    };

    /// Create a new LZW configuration.
    pub fn new(alphabet_size: u16, code_bits: u8) -> Self {
        Self {
            alphabet_size,
            code_bits,
        }
    }

    /// Return a copy with a different reporting code width.
    pub fn with_code_bits(self, code_bits: u8) -> Self {
        Self { code_bits, ..self }
    }

    /// Get the first code available for dictionary growth.
    pub fn first_code(&self) -> Code {
        Code::from(self.alphabet_size)
    }

    /// Check whether `symbol` belongs to the seeded alphabet.
    pub fn contains_symbol(&self, symbol: u32) -> bool {
        symbol < u32::from(self.alphabet_size)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.alphabet_size == 0 || self.alphabet_size > 256 {
            return Err(LzwError::InvalidAlphabetSize(self.alphabet_size));
        }
        if self.code_bits == 0 || self.code_bits > 32 {
            return Err(LzwError::InvalidBitWidth(self.code_bits));
        }
        Ok(())
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::BYTE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_config() {
        let config = LzwConfig::BYTE;
        assert_eq!(config.alphabet_size, 256);
        assert_eq!(config.code_bits, 12);
        assert_eq!(config.first_code(), 256);
        assert!(config.contains_symbol(255));
        assert!(!config.contains_symbol(256));
        assert!(config.validate().is_ok());
        assert_eq!(LzwConfig::default(), config);
    }

    #[test]
    fn test_ascii_config() {
        let config = LzwConfig::ASCII;
        assert_eq!(config.first_code(), 128);
        assert!(config.contains_symbol(127));
        assert!(!config.contains_symbol(128));
    }

    #[test]
    fn test_invalid_config() {
        assert_eq!(
            LzwConfig::new(0, 12).validate(),
            Err(LzwError::InvalidAlphabetSize(0))
        );
        assert_eq!(
            LzwConfig::new(257, 12).validate(),
            Err(LzwError::InvalidAlphabetSize(257))
        );
        assert_eq!(
            LzwConfig::BYTE.with_code_bits(0).validate(),
            Err(LzwError::InvalidBitWidth(0))
        );
        assert_eq!(
            LzwConfig::BYTE.with_code_bits(33).validate(),
            Err(LzwError::InvalidBitWidth(33))
        );
    }
}
