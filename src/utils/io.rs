// Exact-length reads over forward-only byte sources
//
// Every fixed-width read in the crate goes through `read_array`, so this is
// the one place a short read is turned into `Error::ShortRead`.

use std::io::{self, Read};

use crate::error::{Error, Result};

/// Read into `buf` until it is full or the source reports end of stream.
///
/// Returns the number of bytes read. Unlike `read_exact`, a partial fill is
/// not an error, so callers can tell a clean EOF (0) from a truncation.
pub fn read_fill<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Read exactly `N` bytes.
pub fn read_array<R: Read + ?Sized, const N: usize>(reader: &mut R) -> Result<[u8; N]> {
    let mut buffer = [0u8; N];
    let n = read_fill(reader, &mut buffer)?;
    if n < N {
        return Err(Error::ShortRead {
            expected: N as u64,
            actual: n as u64,
        });
    }
    Ok(buffer)
}

/// Read little-endian 16-bit integer
pub fn read_le_u16<R: Read + ?Sized>(reader: &mut R) -> Result<u16> {
    Ok(u16::from_le_bytes(read_array(reader)?))
}

/// Read little-endian 32-bit integer
pub fn read_le_u32<R: Read + ?Sized>(reader: &mut R) -> Result<u32> {
    Ok(u32::from_le_bytes(read_array(reader)?))
}

/// Advance `reader` by exactly `n` bytes without keeping them.
///
/// The bytes are streamed into `io::sink`, so memory use does not depend on
/// `n`.
pub fn discard<R: Read + ?Sized>(reader: &mut R, n: u64) -> Result<()> {
    let copied = io::copy(&mut Read::take(reader, n), &mut io::sink())?;
    if copied < n {
        return Err(Error::ShortRead {
            expected: n,
            actual: copied,
        });
    }
    Ok(())
}

/// Consume the pad byte that follows an odd-length chunk payload.
///
/// Some writers leave the pad off the last chunk in a file, so running into
/// end of stream here is accepted.
pub fn skip_padding<R: Read + ?Sized>(reader: &mut R) -> Result<bool> {
    let mut pad = [0u8; 1];
    Ok(read_fill(reader, &mut pad)? == 1)
}
