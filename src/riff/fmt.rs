// The `fmt ` chunk

use std::io::Read;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::metadata::Metadata;
use crate::riff::chunk::ChunkReader;
use crate::utils::io::{read_le_u16, read_le_u32};

/// Field names written by [`FormatDescriptor::store`].
pub mod keys {
    pub const AUDIO_FORMAT: &str = "AudioFormat";
    pub const NUM_CHANNELS: &str = "NumChannels";
    pub const SAMPLE_RATE: &str = "SampleRate";
    pub const BYTE_RATE: &str = "ByteRate";
    pub const BLOCK_ALIGN: &str = "BlockAlign";
    pub const BIT_RATE: &str = "BitRate";
}

/// Audio parameters from a PCM `fmt ` chunk.
///
/// Fields are taken as they appear in the file. Nothing is cross-checked, so
/// a `byte_rate` that disagrees with `sample_rate * block_align` is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatDescriptor {
    pub audio_format: u16,
    pub num_channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

impl FormatDescriptor {
    /// `WAVE_FORMAT_PCM`
    pub const PCM: u16 = 1;
    /// Payload length of an uncompressed `fmt ` chunk.
    pub const PCM_CHUNK_LEN: u32 = 16;

    /// Decode a `fmt ` payload.
    ///
    /// The declared length is checked before any payload byte is read. Fails
    /// with `UnsupportedFormatLength` for anything but 16 and with
    /// `UnsupportedEncoding` for anything but PCM.
    pub fn decode<R: Read + ?Sized>(chunk: &mut ChunkReader<'_, R>) -> Result<Self> {
        if chunk.len() != Self::PCM_CHUNK_LEN {
            return Err(Error::UnsupportedFormatLength(chunk.len()));
        }

        let audio_format = read_le_u16(chunk)?;
        if audio_format != Self::PCM {
            return Err(Error::UnsupportedEncoding(audio_format));
        }

        Ok(FormatDescriptor {
            audio_format,
            num_channels: read_le_u16(chunk)?,
            sample_rate: read_le_u32(chunk)?,
            byte_rate: read_le_u32(chunk)?,
            block_align: read_le_u16(chunk)?,
            bits_per_sample: read_le_u16(chunk)?,
        })
    }

    /// Write all six fields as decimal strings.
    pub fn store(&self, metadata: &mut Metadata) {
        metadata.insert(keys::AUDIO_FORMAT, self.audio_format.to_string());
        metadata.insert(keys::NUM_CHANNELS, self.num_channels.to_string());
        metadata.insert(keys::SAMPLE_RATE, self.sample_rate.to_string());
        metadata.insert(keys::BYTE_RATE, self.byte_rate.to_string());
        metadata.insert(keys::BLOCK_ALIGN, self.block_align.to_string());
        metadata.insert(keys::BIT_RATE, self.bits_per_sample.to_string());
    }
}
