//! Encode command implementation.

use super::CommandOptions;
use crate::utils::{CompressionJson, print_json, print_stats};
use oxilzw::{CompressionStats, LzwEncoder};

pub fn cmd_encode(text: &str, options: &CommandOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut encoder = LzwEncoder::new(options.config)?;
    let codes = encoder.encode_str(text)?;

    let stats = CompressionStats::new(text.chars().count(), codes.len())
        .with_code_bits(options.config.code_bits);

    if options.json {
        return print_json(&CompressionJson::new(text, &codes, stats));
    }

    print_stats(text, &codes, &stats);
    println!("Dictionary size: {} entries", encoder.dictionary_len());

    Ok(())
}
