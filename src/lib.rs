//! sndtag - read tags from audio files.
//!
//! A stream is identified by its first bytes, then read forward only:
//!
//! - `RIFF....WAVE` containers are walked chunk by chunk. The PCM `fmt `
//!   chunk and `LIST/INFO` text fields are decoded, sample data is skipped
//!   without being buffered.
//! - A bare ID3v1 block (`TAG...`) is decoded field by field.
//!
//! ```
//! let mut wav = b"RIFF\x1c\x00\x00\x00WAVEfmt \x10\x00\x00\x00".to_vec();
//! wav.extend_from_slice(&[1, 0, 2, 0, 0x44, 0xac, 0, 0, 0x10, 0xb1, 2, 0, 4, 0, 16, 0]);
//!
//! let metadata = sndtag::read_tags(&wav[..])?;
//! assert_eq!(metadata.get("SampleRate")?, "44100");
//! # Ok::<(), sndtag::Error>(())
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

mod error;
mod fourcc;
pub mod id3;
mod metadata;
mod options;
pub mod riff;
mod sniff;
mod utils;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use fourcc::FourCC;
pub use id3::read_legacy_tags;
pub use metadata::{Iter, Metadata};
pub use options::{ParseOptions, UnknownChunkPolicy};
pub use riff::{ContainerWalker, FormatDescriptor};
pub use sniff::{sniff, TagFormat};

/// Read the tags of a stream with the default (strict) options.
pub fn read_tags<R: Read>(reader: R) -> Result<Metadata> {
    read_tags_with(reader, &ParseOptions::default())
}

/// Sniff the stream's format, then read its tags.
pub fn read_tags_with<R: Read>(mut reader: R, options: &ParseOptions) -> Result<Metadata> {
    let format = sniff(&mut reader)?;
    debug!(%format, "detected tag format");
    format.read(&mut reader, options)
}

/// Open `path` and read its tags.
pub fn read_tags_from_path<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Metadata> {
    let file = File::open(path.as_ref())?;
    read_tags_with(BufReader::new(file), options)
}

/// Open `path` and report which tag format it starts with.
pub fn detect_path<P: AsRef<Path>>(path: P) -> Result<TagFormat> {
    let mut reader = BufReader::new(File::open(path.as_ref())?);
    sniff(&mut reader)
}
