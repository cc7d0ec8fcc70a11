// Parser configuration

use serde::{Deserialize, Serialize};

/// What to do with a chunk id, or a `LIST` type, the parser has no decoder for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownChunkPolicy {
    /// Fail the parse with `UnrecognizedChunk` (or `UnexpectedFormat` for a
    /// list type).
    #[default]
    Strict,
    /// Discard the payload and carry on with the next chunk.
    Skip,
}

/// Knobs for the RIFF walker.
///
/// Deserializes from a partial JSON object; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub unknown_chunks: UnknownChunkPolicy,
    /// Consume the pad byte after an odd-length chunk payload.
    pub pad_odd_chunks: bool,
    /// Deepest allowed `LIST` nesting below the top-level chunk list.
    pub max_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 8;

    pub fn permissive() -> Self {
        ParseOptions {
            unknown_chunks: UnknownChunkPolicy::Skip,
            ..Self::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            unknown_chunks: UnknownChunkPolicy::Strict,
            pad_odd_chunks: true,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
