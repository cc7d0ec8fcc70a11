// CLI module for sndtag
//
// Command-line front end over the library: argument parsing, parser options,
// and output formatting. Only compiled into the binary.

pub mod commands;
pub mod config;
pub mod output;

pub use commands::{command_detect, command_read};
pub use config::{Commands, Config, OutputFormat};
pub use output::OutputFormatter;
