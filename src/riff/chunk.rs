// Chunk headers and length-bounded payload readers

use std::io::{self, Read, Take};

use tracing::trace;

use crate::error::{Error, Result};
use crate::fourcc::FourCC;
use crate::utils::io::{discard, read_fill};

/// The 8 bytes in front of every chunk payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub id: FourCC,
    /// Payload length in bytes, not counting the header or any pad byte.
    pub len: u32,
}

impl ChunkHeader {
    pub const SIZE: usize = 8;

    /// Read the next chunk header.
    ///
    /// Returns `Ok(None)` when the stream ends cleanly before the first header
    /// byte, which is how a chunk list ends. Running out of bytes part way
    /// through a header is a `TruncatedChunk` error.
    pub fn read<R: Read + ?Sized>(reader: &mut R) -> Result<Option<Self>> {
        let mut buffer = [0u8; Self::SIZE];
        match read_fill(reader, &mut buffer)? {
            0 => Ok(None),
            Self::SIZE => {
                let id = FourCC([buffer[0], buffer[1], buffer[2], buffer[3]]);
                let len = u32::from_le_bytes([buffer[4], buffer[5], buffer[6], buffer[7]]);
                Ok(Some(ChunkHeader { id, len }))
            }
            read => Err(Error::TruncatedChunk { read }),
        }
    }

    /// Odd-length payloads are followed by one pad byte in a word-aligned
    /// stream.
    pub fn is_odd(&self) -> bool {
        self.len % 2 == 1
    }
}

/// One chunk's payload, bounded to the length its header declares.
///
/// Reads past the declared length see end of stream, so a decoder can never
/// run into the next chunk. Call [`finish`](Self::finish) to drain whatever
/// the decoder left behind and keep the underlying stream aligned.
pub struct ChunkReader<'a, R: Read + ?Sized> {
    header: ChunkHeader,
    payload: Take<&'a mut R>,
}

impl<'a, R: Read + ?Sized> ChunkReader<'a, R> {
    pub fn new(header: ChunkHeader, reader: &'a mut R) -> Self {
        ChunkReader {
            header,
            payload: Read::take(reader, u64::from(header.len)),
        }
    }

    pub fn id(&self) -> FourCC {
        self.header.id
    }

    /// Declared payload length.
    pub fn len(&self) -> u32 {
        self.header.len
    }

    /// Payload bytes not yet consumed.
    pub fn remaining(&self) -> u64 {
        self.payload.limit()
    }

    /// Discard the rest of the payload without buffering it.
    pub fn skip(&mut self) -> Result<()> {
        let rest = self.remaining();
        if rest > 0 {
            trace!(id = %self.header.id, rest, "discarding payload");
            discard(&mut self.payload, rest)?;
        }
        Ok(())
    }

    /// Drain the payload so the underlying stream sits right after it.
    pub fn finish(mut self) -> Result<()> {
        self.skip()
    }
}

impl<R: Read + ?Sized> Read for ChunkReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.payload.read(buf)
    }
}
