//! Decode command implementation.

use super::CommandOptions;
use crate::utils::{format_codes, parse_codes, print_json};
use oxilzw::{Code, LzwDecoder};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
struct DecodeJson<'a> {
    codes: &'a [Code],
    output: &'a str,
    length: usize,
}

pub fn cmd_decode(
    codes: &[String],
    options: &CommandOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let codes = parse_codes(codes)?;
    debug!(count = codes.len(), "parsed codes");

    let mut decoder = LzwDecoder::new(options.config)?;
    let output = decoder.decode_to_string(&codes)?;
    let length = output.chars().count();

    if options.json {
        return print_json(&DecodeJson {
            codes: &codes,
            output: &output,
            length,
        });
    }

    println!("Codes: {}", format_codes(&codes));
    println!("Decoded: {}", output);
    println!("Length: {} symbols", length);

    Ok(())
}
