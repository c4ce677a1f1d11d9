//! LZW decoder (decompression).
//!
//! The decoder rebuilds the encoder's dictionary in lockstep from the codes
//! alone. It runs one entry behind the encoder, which is why a code may
//! legitimately refer to the entry the decoder is about to create.

use crate::Code;
use crate::config::LzwConfig;
use crate::dictionary::LzwDictionary;
use crate::error::{LzwError, Result};
use tracing::{debug, warn};

/// How an incoming code resolves against the decoder's dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodeKind {
    /// Code is already in the dictionary.
    Known,
    /// Code equals the next code to be assigned: the encoder emitted an
    /// entry in the same step it created it. Its sequence is always the
    /// previous sequence followed by that sequence's own first symbol.
    NextExpected,
}

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder {
    /// Dictionary for code lookup.
    dict: LzwDictionary,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        let dict = LzwDictionary::new(config)?;
        Ok(Self { dict })
    }

    fn classify(&self, code: Code) -> Result<CodeKind> {
        if self.dict.contains(code) {
            Ok(CodeKind::Known)
        } else if code == self.dict.next_code() {
            Ok(CodeKind::NextExpected)
        } else {
            warn!(
                code,
                next_code = self.dict.next_code(),
                "rejecting unresolvable code"
            );
            Err(LzwError::InvalidCode(code))
        }
    }

    /// Decode LZW codes back into the original byte sequence.
    ///
    /// # Errors
    ///
    /// [`LzwError::InvalidCode`] for the first code that is neither in the
    /// dictionary nor the next expected code. The whole call fails; no
    /// partial output is returned.
    pub fn decode(&mut self, codes: &[Code]) -> Result<Vec<u8>> {
        self.dict.reset();

        let Some((&first, rest)) = codes.split_first() else {
            return Ok(Vec::new());
        };

        let mut output = Vec::with_capacity(codes.len());

        // Only seed codes exist at this point
        if !self.dict.contains(first) {
            warn!(code = first, "first code is not a seed code");
            return Err(LzwError::InvalidCode(first));
        }
        self.dict.append_sequence(first, &mut output)?;

        let mut prev_code = first;

        for &code in rest {
            let first_symbol = match self.classify(code)? {
                CodeKind::Known => self.dict.first_symbol(code)?,
                CodeKind::NextExpected => self.dict.first_symbol(prev_code)?,
            };

            // previous + first symbol of this entry. In the NextExpected
            // case this creates `code` itself.
            self.dict.add_entry_decode(prev_code, first_symbol)?;
            self.dict.append_sequence(code, &mut output)?;

            prev_code = code;
        }

        debug!(
            codes = codes.len(),
            symbols = output.len(),
            dictionary = self.dict.len(),
            "decode finished"
        );
        Ok(output)
    }

    /// Decode LZW codes into text, mapping each symbol to the `char` with
    /// the same ordinal (Latin-1).
    pub fn decode_to_string(&mut self, codes: &[Code]) -> Result<String> {
        let bytes = self.decode(codes)?;
        Ok(bytes.into_iter().map(char::from).collect())
    }

    /// Get the next code the dictionary would assign.
    pub fn next_code(&self) -> Code {
        self.dict.next_code()
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        self.dict.config()
    }

    /// Reset the decoder to initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
    }
}
