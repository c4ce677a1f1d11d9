//! Interactive command implementation.

use super::CommandOptions;
use crate::utils::{CompressionJson, format_codes, print_json};
use dialoguer::Input;
use oxilzw::{CompressionStats, LzwDecoder, LzwEncoder};

/// Word that ends the prompt loop (case-insensitive).
const EXIT_WORD: &str = "exit";

pub fn cmd_interactive(options: &CommandOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut encoder = LzwEncoder::new(options.config)?;
    let mut decoder = LzwDecoder::new(options.config)?;

    loop {
        let line: String = Input::new()
            .with_prompt(format!("Text to compress ('{}' to quit)", EXIT_WORD))
            .allow_empty(true)
            .interact_text()?;

        if line.eq_ignore_ascii_case(EXIT_WORD) {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let codes = match encoder.encode_str(&line) {
            Ok(codes) => codes,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };
        let decoded = decoder.decode_to_string(&codes)?;
        let ok = decoded == line;

        let stats = CompressionStats::new(line.chars().count(), codes.len())
            .with_code_bits(options.config.code_bits);

        if options.json {
            print_json(&CompressionJson {
                decoded: Some(decoded.as_str()),
                ok: Some(ok),
                ..CompressionJson::new(&line, &codes, stats)
            })?;
            continue;
        }

        println!("Input: '{}'", line);
        println!("Length: {} symbols", stats.original_len);
        println!("Codes: {}", format_codes(&codes));
        println!("Code count: {}", stats.code_count);
        println!("Decoded: '{}'", decoded);
        println!("Savings: {:+.1}%", stats.savings_percent());
        if ok {
            println!("Integrity: OK");
        } else {
            println!("Integrity: FAILED - decoded text differs");
        }
    }

    Ok(())
}
