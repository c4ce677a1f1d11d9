//! Command implementations for OxiLZW CLI.

pub mod decode;
pub mod encode;
pub mod interactive;
pub mod roundtrip;

pub use decode::cmd_decode;
pub use encode::cmd_encode;
pub use interactive::cmd_interactive;
pub use roundtrip::cmd_roundtrip;

use oxilzw::LzwConfig;

/// Options shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct CommandOptions {
    pub config: LzwConfig,
    pub json: bool,
}
