// RIFF/WAVE chunk walker

use std::io::Read;

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::fourcc::FourCC;
use crate::metadata::Metadata;
use crate::options::{ParseOptions, UnknownChunkPolicy};
use crate::riff::chunk::{ChunkHeader, ChunkReader};
use crate::riff::fmt::FormatDescriptor;
use crate::riff::{ids, info};
use crate::utils::io::{read_le_u32, skip_padding};

/// What the walker does with a chunk, keyed by its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChunkKind {
    Format,
    /// Sample data; skipped without being read into memory.
    Data,
    List,
    InfoText(&'static str),
}

/// Where a chunk list sits; each scope accepts its own set of ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Directly inside the `RIFF/WAVE` form.
    Form,
    /// Inside a `LIST/INFO` chunk.
    Info,
}

const FORM_CHUNKS: &[(FourCC, ChunkKind)] = &[
    (ids::FMT, ChunkKind::Format),
    (ids::DATA, ChunkKind::Data),
    (ids::LIST, ChunkKind::List),
];

const INFO_CHUNKS: &[(FourCC, ChunkKind)] = &[(ids::LIST, ChunkKind::List)];

impl Scope {
    fn table(self) -> &'static [(FourCC, ChunkKind)] {
        match self {
            Scope::Form => FORM_CHUNKS,
            Scope::Info => INFO_CHUNKS,
        }
    }

    fn classify(self, id: FourCC) -> Option<ChunkKind> {
        let kind = self
            .table()
            .iter()
            .find(|(known, _)| *known == id)
            .map(|&(_, kind)| kind);
        match self {
            Scope::Form => kind,
            Scope::Info => kind.or_else(|| info::field_name(id).map(ChunkKind::InfoText)),
        }
    }
}

/// Reads the chunks of a `RIFF` container into a [`Metadata`].
///
/// Nested `LIST/INFO` chunks are walked on a sub-stream capped at the list's
/// declared length, where only INFO text ids and further `LIST`s are known.
pub struct ContainerWalker<'o> {
    options: &'o ParseOptions,
    metadata: Metadata,
}

impl<'o> ContainerWalker<'o> {
    pub fn new(options: &'o ParseOptions) -> Self {
        ContainerWalker {
            options,
            metadata: Metadata::new(),
        }
    }

    /// Parse a RIFF stream whose 4-byte `RIFF` magic has already been read.
    ///
    /// Chunks are read until the stream ends. The declared container length
    /// is only compared against what was walked for logging.
    pub fn parse<R: Read>(mut self, reader: &mut R) -> Result<Metadata> {
        let declared_len = read_le_u32(reader)?;

        let form = FourCC::read(reader)?;
        if form != ids::WAVE {
            return Err(Error::UnexpectedFormat {
                expected: ids::WAVE,
                found: form,
            });
        }

        // the form type counts toward the declared length
        let walked = 4 + self.walk_chunks(reader, Scope::Form, 0)?;
        if walked != u64::from(declared_len) {
            debug!(declared_len, walked, "RIFF length does not match the chunks read");
        }

        Ok(self.metadata)
    }

    /// Dispatch chunks until `reader` ends. Returns the bytes consumed.
    fn walk_chunks(&mut self, reader: &mut dyn Read, scope: Scope, depth: usize) -> Result<u64> {
        let mut walked = 0;

        while let Some(header) = ChunkHeader::read(reader)? {
            trace!(id = %header.id, len = header.len, depth, "chunk");

            let mut chunk = ChunkReader::new(header, &mut *reader);
            self.dispatch(&mut chunk, scope, depth)?;
            chunk.finish()?;
            walked += ChunkHeader::SIZE as u64 + u64::from(header.len);

            if header.is_odd() && self.options.pad_odd_chunks && skip_padding(reader)? {
                walked += 1;
            }
        }

        Ok(walked)
    }

    fn dispatch<R: Read + ?Sized>(
        &mut self,
        chunk: &mut ChunkReader<'_, R>,
        scope: Scope,
        depth: usize,
    ) -> Result<()> {
        match scope.classify(chunk.id()) {
            Some(ChunkKind::Format) => {
                let format = FormatDescriptor::decode(chunk)?;
                debug!(?format, "fmt chunk");
                format.store(&mut self.metadata);
            }
            Some(ChunkKind::Data) => {
                debug!(len = chunk.len(), "skipping sample data");
                chunk.skip()?;
            }
            Some(ChunkKind::List) => self.read_list(chunk, depth)?,
            Some(ChunkKind::InfoText(name)) => {
                let text = info::decode_text(chunk)?;
                if !text.is_empty() {
                    self.metadata.insert(name, text);
                }
            }
            None => match self.options.unknown_chunks {
                UnknownChunkPolicy::Strict => return Err(Error::UnrecognizedChunk(chunk.id())),
                UnknownChunkPolicy::Skip => {
                    warn!(id = %chunk.id(), len = chunk.len(), ?scope, "skipping unrecognized chunk");
                    chunk.skip()?;
                }
            },
        }
        Ok(())
    }

    fn read_list<R: Read + ?Sized>(&mut self, chunk: &mut ChunkReader<'_, R>, depth: usize) -> Result<()> {
        let list_type = FourCC::read(chunk)?;
        if list_type != ids::INFO {
            return match self.options.unknown_chunks {
                UnknownChunkPolicy::Strict => Err(Error::UnexpectedFormat {
                    expected: ids::INFO,
                    found: list_type,
                }),
                UnknownChunkPolicy::Skip => {
                    warn!(%list_type, len = chunk.len(), "skipping unsupported LIST type");
                    chunk.skip()
                }
            };
        }

        if depth >= self.options.max_depth {
            return Err(Error::NestingTooDeep(self.options.max_depth));
        }

        debug!(depth, len = chunk.len(), "LIST/INFO");
        self.walk_chunks(chunk, Scope::Info, depth + 1)?;
        Ok(())
    }
}
