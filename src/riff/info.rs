// `LIST/INFO` text subchunks

use std::io::Read;

use crate::error::Result;
use crate::fourcc::FourCC;
use crate::riff::chunk::ChunkReader;
use crate::riff::ids;
use crate::utils::encoding::decode_latin1;

/// Longest INFO string kept; anything beyond is discarded with the payload.
const MAX_TEXT_LEN: u64 = 64 * 1024;

/// INFO subchunk ids and the field names they are stored under.
const INFO_FIELDS: &[(FourCC, &str)] = &[
    (ids::INAM, "Title"),
    (ids::IART, "Artist"),
    (ids::IPRD, "Album"),
    (ids::ICMT, "Comment"),
    (ids::ICRD, "Date"),
    (ids::IGNR, "Genre"),
    (ids::ICOP, "Copyright"),
    (ids::ISFT, "Software"),
    (ids::IENG, "Engineer"),
    (ids::ITCH, "Technician"),
    (ids::IKEY, "Keywords"),
    (ids::ISBJ, "Subject"),
    (ids::ISRC, "Source"),
    (ids::ITRK, "Track"),
    (ids::IPRT, "Track"),
];

/// Field name for an INFO subchunk id, if it is one we read.
pub fn field_name(id: FourCC) -> Option<&'static str> {
    INFO_FIELDS
        .iter()
        .find(|(info_id, _)| *info_id == id)
        .map(|&(_, name)| name)
}

/// Read an INFO payload as a NUL-terminated Windows-1252 string.
pub fn decode_text<R: Read + ?Sized>(chunk: &mut ChunkReader<'_, R>) -> Result<String> {
    let mut bytes = Vec::new();
    chunk.by_ref().take(MAX_TEXT_LEN).read_to_end(&mut bytes)?;
    Ok(decode_latin1(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riff::chunk::ChunkHeader;
    use crate::testing::chunk_bytes;
    use std::io::Cursor;

    #[test]
    fn test_field_names() {
        assert_eq!(field_name(ids::INAM), Some("Title"));
        assert_eq!(field_name(ids::IPRT), Some("Track"));
        assert_eq!(field_name(FourCC::new(b"IXYZ")), None);
        assert_eq!(field_name(ids::FMT), None);
    }

    #[test]
    fn test_decode_text() {
        let mut cursor = Cursor::new(chunk_bytes(b"IART", b"Caf\xe9 Trio\0", true));
        let header = ChunkHeader::read(&mut cursor).unwrap().unwrap();
        let mut chunk = ChunkReader::new(header, &mut cursor);
        assert_eq!(decode_text(&mut chunk).unwrap(), "Café Trio");
        chunk.finish().unwrap();
    }

    #[test]
    fn test_long_text_is_capped() {
        let payload = vec![b'a'; 70_000];
        let bytes = chunk_bytes(b"ICMT", &payload, true);
        let total = bytes.len() as u64;
        let mut cursor = Cursor::new(bytes);

        let header = ChunkHeader::read(&mut cursor).unwrap().unwrap();
        let mut chunk = ChunkReader::new(header, &mut cursor);
        let text = decode_text(&mut chunk).unwrap();
        assert_eq!(text.len() as u64, MAX_TEXT_LEN);
        assert_eq!(chunk.remaining(), 70_000 - MAX_TEXT_LEN);
        chunk.finish().unwrap();
        assert_eq!(cursor.position(), total);
    }
}
