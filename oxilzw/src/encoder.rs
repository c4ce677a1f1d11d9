//! LZW encoder (compression).

use crate::Code;
use crate::config::LzwConfig;
use crate::dictionary::LzwDictionary;
use crate::error::{LzwError, Result};
use tracing::debug;

/// LZW encoder for compression.
#[derive(Debug)]
pub struct LzwEncoder {
    /// Dictionary for sequence lookup.
    dict: LzwDictionary,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        let dict = LzwDictionary::new(config)?;
        Ok(Self { dict })
    }

    /// Encode a byte sequence into LZW codes.
    ///
    /// # Algorithm
    ///
    /// 1. Reset the dictionary to the single-symbol seed
    /// 2. Extend the current match while `current + symbol` is in the dictionary
    /// 3. Otherwise emit the code for `current`, add `current + symbol`
    ///    at the next code and restart the match at `symbol`
    /// 4. Emit the code for the final pending match
    ///
    /// # Errors
    ///
    /// [`LzwError::UnsupportedSymbol`] if a byte lies outside the configured
    /// alphabet. Never fails for [`LzwConfig::BYTE`] short of exhausting the
    /// code space.
    pub fn encode(&mut self, input: &[u8]) -> Result<Vec<Code>> {
        self.encode_symbols(input.iter().map(|&b| u32::from(b)))
    }

    /// Encode text, treating each `char` as the symbol with the same ordinal.
    ///
    /// Characters above the alphabet (above U+00FF for [`LzwConfig::BYTE`])
    /// are rejected.
    pub fn encode_str(&mut self, input: &str) -> Result<Vec<Code>> {
        self.encode_symbols(input.chars().map(u32::from))
    }

    fn encode_symbols(&mut self, input: impl Iterator<Item = u32>) -> Result<Vec<Code>> {
        self.dict.reset();

        let mut output = Vec::new();
        let mut consumed = 0usize;

        // Code of the longest match so far (None until the first symbol)
        let mut current: Option<Code> = None;

        for (position, ordinal) in input.enumerate() {
            consumed += 1;
            if !self.dict.config().contains_symbol(ordinal) {
                return Err(LzwError::UnsupportedSymbol {
                    symbol: char::from_u32(ordinal).unwrap_or(char::REPLACEMENT_CHARACTER),
                    position,
                });
            }
            let symbol = ordinal as u8;

            current = Some(match current {
                None => Code::from(symbol),
                Some(prefix) => match self.dict.find(prefix, symbol) {
                    // Sequence exists in dictionary - keep extending
                    Some(code) => code,
                    None => {
                        output.push(prefix);
                        self.dict.add_entry(prefix, symbol)?;
                        Code::from(symbol)
                    }
                },
            });
        }

        // Flush the final match
        if let Some(code) = current {
            output.push(code);
        }

        debug!(
            symbols = consumed,
            codes = output.len(),
            dictionary = self.dict.len(),
            "encode finished"
        );
        Ok(output)
    }

    /// Get the next code the dictionary would assign.
    pub fn next_code(&self) -> Code {
        self.dict.next_code()
    }

    /// Number of dictionary entries after the last call, seed included.
    pub fn dictionary_len(&self) -> usize {
        self.dict.len()
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        self.dict.config()
    }

    /// Reset the encoder to initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::LzwDecoder;

    #[test]
    fn test_encode_abababa() {
        let mut encoder = LzwEncoder::new(LzwConfig::BYTE).unwrap();
        let codes = encoder.encode(b"ABABABA").unwrap();

        // A, B, AB, then ABA which was created in the same step it is used
        assert_eq!(codes, vec![65, 66, 256, 258]);
        assert_eq!(encoder.next_code(), 259);
    }

    #[test]
    fn test_encode_tobeornot() {
        let mut encoder = LzwEncoder::new(LzwConfig::BYTE).unwrap();
        let codes = encoder.encode(b"TOBEORNOTTOBEORTOBEORNOT").unwrap();

        let expected: Vec<Code> = vec![
            84, 79, 66, 69, 79, 82, 78, 79, 84, 256, 258, 260, 265, 259, 261, 263,
        ];
        assert_eq!(codes, expected);
    }

    #[test]
    fn test_encode_empty() {
        let mut encoder = LzwEncoder::new(LzwConfig::BYTE).unwrap();
        assert!(encoder.encode(b"").unwrap().is_empty());
        assert_eq!(encoder.next_code(), 256);
    }

    #[test]
    fn test_encode_single_byte() {
        let mut encoder = LzwEncoder::new(LzwConfig::BYTE).unwrap();
        assert_eq!(encoder.encode(b"A").unwrap(), vec![65]);

        // No dictionary growth
        assert_eq!(encoder.next_code(), 256);
        assert_eq!(encoder.dictionary_len(), 256);
    }

    #[test]
    fn test_encode_repeating() {
        let mut encoder = LzwEncoder::new(LzwConfig::BYTE).unwrap();

        let codes = encoder.encode(b"AAAAAAA").unwrap();
        assert!(codes.len() < 7);
        assert_eq!(codes, vec![65, 256, 257, 65]);

        let original = vec![b'X'; 500];
        let codes = encoder.encode(&original).unwrap();
        assert!(codes.len() < original.len() / 10);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let mut encoder = LzwEncoder::new(LzwConfig::BYTE).unwrap();
        let first = encoder.encode(b"hello hello world world").unwrap();
        let second = encoder.encode(b"hello hello world world").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_encode_resets_between_calls() {
        let mut encoder = LzwEncoder::new(LzwConfig::BYTE).unwrap();
        encoder.encode(b"ABABABABAB").unwrap();

        // A fresh call must not see "AB" from the previous input
        assert_eq!(encoder.encode(b"AB").unwrap(), vec![65, 66]);
    }

    #[test]
    fn test_encode_str_latin1() {
        let mut encoder = LzwEncoder::new(LzwConfig::BYTE).unwrap();
        assert_eq!(encoder.encode_str("A").unwrap(), vec![65]);
        assert_eq!(encoder.encode_str("é").unwrap(), vec![0xE9]);
    }

    #[test]
    fn test_encode_str_rejects_wide_chars() {
        let mut encoder = LzwEncoder::new(LzwConfig::BYTE).unwrap();
        let err = encoder.encode_str("abЖ").unwrap_err();
        assert_eq!(
            err,
            LzwError::UnsupportedSymbol {
                symbol: 'Ж',
                position: 2
            }
        );
    }

    #[test]
    fn test_encode_ascii_rejects_high_bytes() {
        let mut encoder = LzwEncoder::new(LzwConfig::ASCII).unwrap();
        assert_eq!(encoder.encode(b"ABAB").unwrap(), vec![65, 66, 128]);

        let err = encoder.encode(&[b'A', 0x80]).unwrap_err();
        assert!(matches!(
            err,
            LzwError::UnsupportedSymbol { position: 1, .. }
        ));
    }

    #[test]
    fn test_encode_all_bytes() {
        let mut encoder = LzwEncoder::new(LzwConfig::BYTE).unwrap();

        let original: Vec<u8> = (0..=255).collect();
        let codes = encoder.encode(&original).unwrap();
        let expected: Vec<Code> = (0..=255).collect();
        assert_eq!(codes, expected);

        let mut decoder = LzwDecoder::new(LzwConfig::BYTE).unwrap();
        assert_eq!(decoder.decode(&codes).unwrap(), original);
    }
}
