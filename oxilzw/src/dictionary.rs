//! LZW dictionary (code table) management.
//!
//! Entries are stored as an arena of `prefix code + appended symbol` links
//! rather than full byte strings. Inserting is O(1) and a sequence is only
//! materialized, in O(length), when it has to be written to the output.

use crate::Code;
use crate::config::LzwConfig;
use crate::error::{LzwError, Result};
use std::collections::HashMap;
use tracing::{debug, trace};

/// One dictionary entry: the sequence of `prefix` followed by `symbol`.
#[derive(Debug, Clone, Copy)]
struct Entry {
    /// Code of the sequence minus its last symbol (`None` for seed entries).
    prefix: Option<Code>,
    /// Last symbol of the sequence.
    symbol: u8,
    /// First symbol of the sequence.
    first: u8,
    /// Sequence length in symbols.
    len: usize,
}

/// LZW dictionary for encoding and decoding.
///
/// The arena maps code -> sequence. For encoding we also keep a trie index
/// `(prefix, symbol) -> code`, which is an exact match on the full sequence.
#[derive(Debug)]
pub struct LzwDictionary {
    /// Code table: code -> entry.
    table: Vec<Entry>,
    /// Child lookup: (prefix code, symbol) -> code (for encoding only).
    children: HashMap<(Code, u8), Code>,
    /// Configuration.
    config: LzwConfig,
    /// Next available code.
    next_code: Code,
}

impl LzwDictionary {
    /// Create a new LZW dictionary with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;

        let mut dict = Self {
            table: Vec::with_capacity(usize::from(config.alphabet_size)),
            children: HashMap::new(),
            config,
            next_code: 0,
        };

        dict.reset();
        Ok(dict)
    }

    /// Reset the dictionary to its seeded state.
    pub fn reset(&mut self) {
        self.table.clear();
        self.children.clear();

        // Single-symbol codes (0..alphabet_size)
        for symbol in 0..self.config.alphabet_size {
            let symbol = symbol as u8;
            self.table.push(Entry {
                prefix: None,
                symbol,
                first: symbol,
                len: 1,
            });
        }

        self.next_code = self.config.first_code();
        debug!(
            alphabet_size = self.config.alphabet_size,
            next_code = self.next_code,
            "dictionary reset"
        );
    }

    /// Add `prefix + symbol` to the dictionary (for encoding).
    ///
    /// Returns the assigned code.
    pub fn add_entry(&mut self, prefix: Code, symbol: u8) -> Result<Code> {
        debug_assert!(
            !self.children.contains_key(&(prefix, symbol)),
            "sequence already present in dictionary"
        );

        let code = self.push_entry(prefix, symbol)?;
        self.children.insert((prefix, symbol), code);
        Ok(code)
    }

    /// Add `prefix + symbol` to the dictionary (for decoding).
    ///
    /// Similar to `add_entry` but doesn't update the child index; the
    /// decoder only ever looks codes up.
    pub fn add_entry_decode(&mut self, prefix: Code, symbol: u8) -> Result<Code> {
        self.push_entry(prefix, symbol)
    }

    fn push_entry(&mut self, prefix: Code, symbol: u8) -> Result<Code> {
        let parent = *self.entry(prefix)?;
        let code = self.next_code;
        let next = code.checked_add(1).ok_or(LzwError::CodeSpaceExhausted)?;

        debug_assert_eq!(code as usize, self.table.len());
        self.table.push(Entry {
            prefix: Some(prefix),
            symbol,
            first: parent.first,
            len: parent.len + 1,
        });
        self.next_code = next;

        trace!(code, prefix, symbol, len = parent.len + 1, "dictionary entry added");
        Ok(code)
    }

    fn entry(&self, code: Code) -> Result<&Entry> {
        self.table
            .get(code as usize)
            .ok_or(LzwError::InvalidCode(code))
    }

    /// Find the code for `prefix + symbol` (for encoding).
    pub fn find(&self, prefix: Code, symbol: u8) -> Option<Code> {
        self.children.get(&(prefix, symbol)).copied()
    }

    /// Check whether `code` has been assigned.
    pub fn contains(&self, code: Code) -> bool {
        (code as usize) < self.table.len()
    }

    /// Get the first symbol of the sequence for `code`.
    pub fn first_symbol(&self, code: Code) -> Result<u8> {
        self.entry(code).map(|e| e.first)
    }

    /// Get the length of the sequence for `code`.
    pub fn sequence_len(&self, code: Code) -> Result<usize> {
        self.entry(code).map(|e| e.len)
    }

    /// Append the sequence for `code` to `out`.
    pub fn append_sequence(&self, code: Code, out: &mut Vec<u8>) -> Result<()> {
        let len = self.entry(code)?.len;
        let start = out.len();
        out.resize(start + len, 0);

        // Walk the prefix chain backwards, filling from the end.
        let mut pos = out.len();
        let mut cursor = Some(code);
        while let Some(c) = cursor {
            let entry = &self.table[c as usize];
            pos -= 1;
            out[pos] = entry.symbol;
            cursor = entry.prefix;
        }
        debug_assert_eq!(pos, start);

        Ok(())
    }

    /// Get the sequence for `code` as a new vector.
    pub fn sequence(&self, code: Code) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.sequence_len(code)?);
        self.append_sequence(code, &mut out)?;
        Ok(out)
    }

    /// Get the next code that will be assigned.
    pub fn next_code(&self) -> Code {
        self.next_code
    }

    /// Number of entries, seed entries included.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false once seeded; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }
}
