// RIFF/WAVE metadata handling module
//
// RIFF structure:
// - "RIFF" (4 bytes) + container length (4 bytes, little-endian)
// - form type: "WAVE" (4 bytes)
// - chunks, each:
//   - id (4 bytes)
//   - payload length (4 bytes, little-endian)
//   - payload, plus one pad byte when the length is odd
//
// Chunks read here:
// - "fmt ": PCM format description
// - "data": sample data (skipped)
// - "LIST" of type "INFO": text subchunks (INAM, IART, ...)

pub mod chunk;
pub mod fmt;
pub mod ids;
pub mod info;
pub mod walker;

pub use chunk::{ChunkHeader, ChunkReader};
pub use fmt::FormatDescriptor;
pub use walker::ContainerWalker;
