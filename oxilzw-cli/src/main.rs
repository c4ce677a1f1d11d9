//! OxiLZW CLI
//!
//! Compress text into LZW codes and back from the command line.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{CommandOptions, cmd_decode, cmd_encode, cmd_interactive, cmd_roundtrip};
use oxilzw::LzwConfig;

#[derive(Parser)]
#[command(name = "oxilzw")]
#[command(author, version, about = "Pure Rust LZW compression to integer codes")]
#[command(long_about = "
OxiLZW compresses text into a sequence of LZW dictionary codes and decodes
code sequences back into text. Codes 0-255 are single characters (U+0000 to
U+00FF); new sequences are numbered from 256.

Examples:
  oxilzw encode ABABABA
  oxilzw decode 65 66 256 258
  oxilzw decode '[65, 66, 256, 258]'
  oxilzw roundtrip TOBEORNOTTOBEORTOBEORNOT 'Hello, World!'
  oxilzw --json encode AAAAAAA
  oxilzw interactive
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Seed the dictionary with 7-bit ASCII only (codes 0-127)
    #[arg(long, global = true)]
    ascii: bool,

    /// Assumed bits per code for the reported compression ratio
    #[arg(long, global = true, default_value_t = 12, value_parser = clap::value_parser!(u8).range(1..=32))]
    code_bits: u8,

    /// Output as JSON (machine-readable)
    #[arg(short, long, global = true)]
    json: bool,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> CommandOptions {
        let base = if self.ascii {
            LzwConfig::ASCII
        } else {
            LzwConfig::BYTE
        };
        CommandOptions {
            config: base.with_code_bits(self.code_bits),
            json: self.json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compress text into LZW codes
    #[command(alias = "e")]
    Encode {
        /// Text to compress
        text: String,
    },

    /// Decompress LZW codes into text
    #[command(alias = "d")]
    Decode {
        /// Codes, as separate arguments or a comma separated list
        #[arg(required = true, num_args = 1..)]
        codes: Vec<String>,
    },

    /// Compress and decompress each input, verifying the result
    #[command(alias = "r")]
    Roundtrip {
        /// Texts to check
        #[arg(required = true, num_args = 1..)]
        texts: Vec<String>,
    },

    /// Prompt for lines of text and compress each one
    #[command(alias = "i")]
    Interactive,

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let options = cli.options();

    let result = match &cli.command {
        Commands::Encode { text } => cmd_encode(text, &options),
        Commands::Decode { codes } => cmd_decode(codes, &options),
        Commands::Roundtrip { texts } => cmd_roundtrip(texts, &options),
        Commands::Interactive => cmd_interactive(&options),
        Commands::Completions { shell } => {
            clap_complete::generate(*shell, &mut Cli::command(), "oxilzw", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
