// Text decoding for fixed-width and NUL-terminated tag strings

use encoding_rs::WINDOWS_1252;

/// Decode a NUL-terminated Latin-1 string.
///
/// Bytes after the first NUL are ignored, and surrounding whitespace is
/// trimmed. ISO-8859-1 is decoded as Windows-1252, which is a superset for
/// every printable character.
pub fn decode_latin1(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    WINDOWS_1252.decode(&bytes[..end]).0.trim().to_string()
}
