//! Compression ratio reporting.
//!
//! LZW here produces plain integer codes, never a packed bit stream, so the
//! ratio assumes every code occupies a fixed number of bits (12 by default)
//! regardless of how large the codes actually grew. This is a reporting
//! approximation, not a measurement of any encoded size.

use serde::Serialize;

/// Bits per input symbol.
pub const SYMBOL_BITS: u32 = 8;

/// Default assumed width of one code in bits.
pub const DEFAULT_CODE_BITS: u8 = 12;

/// Ratio of original bits to compressed bits.
///
/// `original_len * 8 / (code_count * bits_per_code)`. Returns `0.0` when
/// there is nothing compressed to divide by.
pub fn compression_ratio(original_len: usize, code_count: usize, bits_per_code: u8) -> f64 {
    let compressed_bits = code_count as f64 * f64::from(bits_per_code);
    if compressed_bits == 0.0 {
        return 0.0;
    }
    (original_len as f64 * f64::from(SYMBOL_BITS)) / compressed_bits
}

/// Size figures for one encode call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompressionStats {
    /// Number of input symbols.
    pub original_len: usize,
    /// Number of emitted codes.
    pub code_count: usize,
    /// Assumed bits per code.
    pub code_bits: u8,
}

impl CompressionStats {
    /// Create stats with the default 12-bit code assumption.
    pub fn new(original_len: usize, code_count: usize) -> Self {
        Self {
            original_len,
            code_count,
            code_bits: DEFAULT_CODE_BITS,
        }
    }

    /// Override the assumed bits per code.
    pub fn with_code_bits(mut self, code_bits: u8) -> Self {
        self.code_bits = code_bits;
        self
    }

    /// Original bits / compressed bits.
    pub fn ratio(&self) -> f64 {
        compression_ratio(self.original_len, self.code_count, self.code_bits)
    }

    /// Symbols per code, or `0.0` if no codes were emitted.
    pub fn symbol_ratio(&self) -> f64 {
        if self.code_count == 0 {
            return 0.0;
        }
        self.original_len as f64 / self.code_count as f64
    }

    /// Percentage of symbols saved by emitting codes instead
    /// (`(1 - codes / symbols) * 100`), `0.0` for empty input.
    pub fn savings_percent(&self) -> f64 {
        if self.original_len == 0 {
            return 0.0;
        }
        (1.0 - self.code_count as f64 / self.original_len as f64) * 100.0
    }
}
