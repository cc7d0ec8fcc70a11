// CLI configuration
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use sndtag::{ParseOptions, UnknownChunkPolicy};

/// sndtag - Audio tag reader
#[derive(Parser, Debug)]
#[command(name = "sndtag")]
#[command(about = "Read tags and format information from WAV files and ID3v1 blocks", long_about = None)]
#[command(version)]
pub struct Config {
    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Quiet mode (suppress progress messages)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON file with parser options
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Skip chunks the parser does not recognize instead of failing
    #[arg(long, global = true)]
    pub skip_unknown: bool,

    /// Do not expect a pad byte after odd-length chunks
    #[arg(long, global = true)]
    pub no_padding: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Pretty,
    /// Compact JSON
    Json,
    /// Key-value pairs
    KeyValue,
    /// Table format
    Table,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read metadata from audio file(s)
    Read {
        /// Audio file path(s) or glob patterns
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,

        /// Output to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Detect file format
    Detect {
        /// Audio file path(s) or glob patterns
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,
    },
}

impl Config {
    /// Parser options: defaults, then the `--config` file, then flags.
    pub fn parse_options(&self) -> anyhow::Result<ParseOptions> {
        let mut options = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => ParseOptions::default(),
        };

        if self.skip_unknown {
            options.unknown_chunks = UnknownChunkPolicy::Skip;
        }
        if self.no_padding {
            options.pad_odd_chunks = false;
        }
        Ok(options)
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::parse_from(["sndtag", "--skip-unknown", "--no-padding", "read", "a.wav"]);
        let options = config.parse_options().unwrap();
        assert_eq!(options.unknown_chunks, UnknownChunkPolicy::Skip);
        assert!(!options.pad_odd_chunks);
        assert_eq!(options.max_depth, ParseOptions::DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let config = Config::parse_from(["sndtag", "detect", "a.wav", "-f", "json", "-vv"]);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level(), "trace");
        match config.command {
            Commands::Detect { files } => assert_eq!(files, ["a.wav"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_read_requires_files() {
        assert!(Config::try_parse_from(["sndtag", "read"]).is_err());
    }

    #[test]
    fn test_quiet_wins() {
        let config = Config::parse_from(["sndtag", "-q", "-v", "read", "a.wav"]);
        assert_eq!(config.log_level(), "error");
    }
}
