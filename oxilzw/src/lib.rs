//! # OxiLZW: Pure Rust LZW Compression
//!
//! This crate provides LZW (Lempel-Ziv-Welch) compression and decompression
//! over plain integer code sequences.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Integer codes**: Output is a `Vec<Code>`, no bit packing
//! - **Arena dictionary**: Entries are `prefix code + symbol`, O(1) insertion
//! - **Unbounded growth**: No code-size cap or dictionary eviction
//!
//! ## Algorithm
//!
//! - Codes `0..alphabet_size` are the single-symbol seed (0-255 by default)
//! - New sequences get codes sequentially from `alphabet_size` (256)
//! - The encoder emits the code of the longest dictionary match and adds
//!   that match extended by the next symbol
//! - The decoder rebuilds the same dictionary from the codes alone
//!
//! Every encode and decode call resets its dictionary first, so an encoder
//! and decoder never share state; they agree because the growth rule is
//! deterministic.
//!
//! ## Example
//!
//! ```rust
//! use oxilzw::{LzwConfig, compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! // Compress
//! let codes = compress(original, LzwConfig::BYTE).unwrap();
//! assert!(codes.len() < original.len());
//!
//! // Decompress
//! let decompressed = decompress(&codes, LzwConfig::BYTE).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Concurrency
//!
//! [`LzwEncoder::encode`] and [`LzwDecoder::decode`] take `&mut self` and
//! reset the dictionary on entry, so one instance cannot be used from two
//! threads at once without external locking (e.g. a `Mutex`). The free
//! functions in this crate create a fresh dictionary per call and are safe
//! to call concurrently.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;
mod error;
pub mod stats;

pub use config::LzwConfig;
pub use decoder::LzwDecoder;
pub use dictionary::LzwDictionary;
pub use encoder::LzwEncoder;
pub use error::{LzwError, Result};
pub use stats::{CompressionStats, compression_ratio};

/// An LZW code. Dictionary growth is unbounded, so codes are 32-bit.
pub type Code = u32;

/// Compress data with LZW using the given configuration.
///
/// # Example
///
/// ```rust
/// use oxilzw::{compress, LzwConfig};
///
/// let codes = compress(b"ABABABA", LzwConfig::BYTE).unwrap();
/// assert_eq!(codes, vec![65, 66, 256, 258]);
/// ```
pub fn compress(data: &[u8], config: LzwConfig) -> Result<Vec<Code>> {
    let mut encoder = LzwEncoder::new(config)?;
    encoder.encode(data)
}

/// Decompress LZW codes with the given configuration.
///
/// # Example
///
/// ```rust
/// use oxilzw::{decompress, LzwConfig, LzwError};
///
/// let data = decompress(&[65, 66, 256, 258], LzwConfig::BYTE).unwrap();
/// assert_eq!(data, b"ABABABA");
///
/// let err = decompress(&[65, 999], LzwConfig::BYTE).unwrap_err();
/// assert_eq!(err, LzwError::InvalidCode(999));
/// ```
pub fn decompress(codes: &[Code], config: LzwConfig) -> Result<Vec<u8>> {
    let mut decoder = LzwDecoder::new(config)?;
    decoder.decode(codes)
}

/// Compress text over the byte alphabet (convenience function).
///
/// Each `char` is the symbol with the same ordinal; characters above
/// U+00FF fail with [`LzwError::UnsupportedSymbol`].
///
/// # Example
///
/// ```rust
/// use oxilzw::compress_str;
///
/// assert_eq!(compress_str("A").unwrap(), vec![65]);
/// assert!(compress_str("").unwrap().is_empty());
/// ```
pub fn compress_str(text: &str) -> Result<Vec<Code>> {
    let mut encoder = LzwEncoder::new(LzwConfig::BYTE)?;
    encoder.encode_str(text)
}

/// Decompress codes into text over the byte alphabet (convenience function).
///
/// # Example
///
/// ```rust
/// use oxilzw::{compress_str, decompress_str};
///
/// let codes = compress_str("Hello, World!").unwrap();
/// assert_eq!(decompress_str(&codes).unwrap(), "Hello, World!");
/// ```
pub fn decompress_str(codes: &[Code]) -> Result<String> {
    let mut decoder = LzwDecoder::new(LzwConfig::BYTE)?;
    decoder.decode_to_string(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_bytes() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let codes = compress(original, LzwConfig::BYTE).unwrap();
        assert_eq!(decompress(&codes, LzwConfig::BYTE).unwrap(), original);
    }

    #[test]
    fn test_roundtrip_str() {
        for text in ["ABABABA", "AAAAAAA", "Hello, World!", "ABABABABABABABAB"] {
            let codes = compress_str(text).unwrap();
            assert_eq!(decompress_str(&codes).unwrap(), text);
        }
    }

    #[test]
    fn test_invalid_config() {
        assert_eq!(
            compress(b"A", LzwConfig::new(300, 12)),
            Err(LzwError::InvalidAlphabetSize(300))
        );
        assert_eq!(
            decompress(&[65], LzwConfig::new(256, 0)),
            Err(LzwError::InvalidBitWidth(0))
        );
    }

    #[test]
    fn test_310_bytes_no_truncation() {
        let original = b"This is a test of compression! ".repeat(10);
        assert_eq!(original.len(), 310);

        let codes = compress(&original, LzwConfig::BYTE).unwrap();
        let decompressed = decompress(&codes, LzwConfig::BYTE).unwrap();
        assert_eq!(decompressed.len(), 310);
        assert_eq!(decompressed, original);
    }
}
