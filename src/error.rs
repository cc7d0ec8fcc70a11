// Error types for tag reading

use std::io;

use thiserror::Error;

use crate::fourcc::FourCC;

/// Everything that can stop a parse.
///
/// Every variant is terminal for the stream it came from: the source is not
/// rewindable, so nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// Fewer bytes were available than a fixed-width read required.
    #[error("expected to read {expected} bytes, actually read {actual}")]
    ShortRead { expected: u64, actual: u64 },

    /// The magic prefix matches no known container family.
    #[error("unrecognized header: {}", String::from_utf8_lossy(.0))]
    UnrecognizedHeader(Vec<u8>),

    /// A form or list type tag did not match the one literal we support.
    #[error("expected chunk ID {expected}, got {found}")]
    UnexpectedFormat { expected: FourCC, found: FourCC },

    /// A chunk header began but the stream ended before all 8 bytes arrived.
    #[error("chunk header truncated after {read} of 8 bytes")]
    TruncatedChunk { read: usize },

    #[error("unrecognized chunk ID: {0}")]
    UnrecognizedChunk(FourCC),

    #[error("unsupported fmt chunk length {0}, expected 16")]
    UnsupportedFormatLength(u32),

    #[error("expected pcm audio format 1, got {0}")]
    UnsupportedEncoding(u16),

    #[error("chunks nested deeper than {0} levels")]
    NestingTooDeep(usize),

    /// Returned by [`Metadata::get`](crate::Metadata::get).
    #[error("property {0} does not exist")]
    MissingField(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
