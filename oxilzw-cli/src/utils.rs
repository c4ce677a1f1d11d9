//! Utility functions for the CLI.

use oxilzw::{Code, CompressionStats};
use serde::Serialize;
use std::num::ParseIntError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug output for
/// the library.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "oxilzw=debug,oxilzw_cli=debug"
    } else {
        "oxilzw=warn,oxilzw_cli=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Parse codes given as separate arguments and/or comma or space separated
/// lists. Surrounding brackets are ignored, so `[65, 66, 256]` works.
pub fn parse_codes(args: &[String]) -> Result<Vec<Code>, ParseIntError> {
    args.iter()
        .flat_map(|arg| arg.split(|c: char| c == ',' || c.is_whitespace()))
        .map(|token| token.trim_matches(|c| c == '[' || c == ']'))
        .filter(|token| !token.is_empty())
        .map(str::parse::<Code>)
        .collect()
}

/// Format codes as `[65, 66, 256]`.
pub fn format_codes(codes: &[Code]) -> String {
    let items: Vec<String> = codes.iter().map(Code::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// JSON report for one compressed input.
#[derive(Debug, Serialize)]
pub struct CompressionJson<'a> {
    pub input: &'a str,
    pub codes: &'a [Code],
    #[serde(flatten)]
    pub stats: CompressionStats,
    pub ratio: f64,
    pub savings_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
}

impl<'a> CompressionJson<'a> {
    pub fn new(input: &'a str, codes: &'a [Code], stats: CompressionStats) -> Self {
        Self {
            input,
            codes,
            stats,
            ratio: stats.ratio(),
            savings_percent: stats.savings_percent(),
            decoded: None,
            ok: None,
        }
    }
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the human-readable summary for one compressed input.
pub fn print_stats(input: &str, codes: &[Code], stats: &CompressionStats) {
    println!("Input: {}", input);
    println!("Length: {} symbols", stats.original_len);
    println!("Codes: {}", format_codes(codes));
    println!("Code count: {}", stats.code_count);
    println!(
        "Compression ratio: {:.2}:1 (assuming {}-bit codes)",
        stats.ratio(),
        stats.code_bits
    );
    if stats.code_count > 0 {
        println!("Savings: {:+.1}%", stats.savings_percent());
    }
}
