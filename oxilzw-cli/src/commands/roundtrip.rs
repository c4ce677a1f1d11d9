//! Roundtrip command implementation.

use super::CommandOptions;
use crate::utils::{CompressionJson, print_json, print_stats};
use oxilzw::{CompressionStats, LzwDecoder, LzwEncoder};

pub fn cmd_roundtrip(
    texts: &[String],
    options: &CommandOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    // Independent dictionaries for each direction
    let mut encoder = LzwEncoder::new(options.config)?;
    let mut decoder = LzwDecoder::new(options.config)?;

    let mut reports = Vec::with_capacity(texts.len());
    let mut failures = 0usize;

    for (i, text) in texts.iter().enumerate() {
        let codes = encoder.encode_str(text)?;
        let decoded = decoder.decode_to_string(&codes)?;
        let ok = decoded == *text;
        if !ok {
            failures += 1;
        }

        let stats = CompressionStats::new(text.chars().count(), codes.len())
            .with_code_bits(options.config.code_bits);

        if options.json {
            reports.push((text, codes, decoded, stats, ok));
            continue;
        }

        if i > 0 {
            println!();
        }
        print_stats(text, &codes, &stats);
        println!("Decoded: {}", decoded);
        if ok {
            println!("Status: OK");
        } else {
            println!("Status: MISMATCH");
        }
    }

    if options.json {
        let json: Vec<CompressionJson> = reports
            .iter()
            .map(|(text, codes, decoded, stats, ok)| CompressionJson {
                decoded: Some(decoded.as_str()),
                ok: Some(*ok),
                ..CompressionJson::new(text.as_str(), codes, *stats)
            })
            .collect();
        print_json(&json)?;
    }

    if failures > 0 {
        eprintln!("{} of {} inputs failed to roundtrip", failures, texts.len());
        std::process::exit(2);
    }

    Ok(())
}
