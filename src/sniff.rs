// Container detection from the magic prefix

use std::fmt;
use std::io::Read;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::id3::{read_legacy_tags, Id3v1Tag};
use crate::metadata::Metadata;
use crate::options::ParseOptions;
use crate::riff::{ids, ContainerWalker};
use crate::utils::io::read_array;

/// The kind of tag data a stream starts with.
///
/// Returned by [`sniff`] once the magic bytes are consumed; [`read`](Self::read)
/// parses the rest of the same stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TagFormat {
    /// `RIFF` container, read chunk by chunk.
    Riff,
    /// Bare ID3v1 block starting with `TAG`.
    LegacyTag,
}

impl TagFormat {
    pub fn name(&self) -> &'static str {
        match self {
            TagFormat::Riff => "RIFF",
            TagFormat::LegacyTag => "ID3v1",
        }
    }

    /// Parse the remainder of a stream this format was sniffed from.
    pub fn read<R: Read>(self, reader: &mut R, options: &ParseOptions) -> Result<Metadata> {
        match self {
            TagFormat::Riff => ContainerWalker::new(options).parse(reader),
            TagFormat::LegacyTag => read_legacy_tags(reader),
        }
    }
}

impl fmt::Display for TagFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identify the stream from its first bytes.
///
/// Reads 3 bytes, plus a 4th when they spell `RIF`. Nothing more is consumed,
/// and the stream cannot be rewound, so a failed sniff ends the stream's use.
pub fn sniff<R: Read + ?Sized>(reader: &mut R) -> Result<TagFormat> {
    let header = read_array::<_, 3>(reader)?;

    if &header == Id3v1Tag::TAG_ID {
        return Ok(TagFormat::LegacyTag);
    }

    if header == ids::RIFF.as_bytes()[..3] {
        let [last] = read_array::<_, 1>(reader)?;
        if last != ids::RIFF.as_bytes()[3] {
            let mut observed = header.to_vec();
            observed.push(last);
            return Err(Error::UnrecognizedHeader(observed));
        }
        return Ok(TagFormat::Riff);
    }

    Err(Error::UnrecognizedHeader(header.to_vec()))
}
