// Chunk identifiers and form types understood by the RIFF walker

use crate::fourcc::FourCC;

pub const RIFF: FourCC = FourCC::new(b"RIFF");
pub const WAVE: FourCC = FourCC::new(b"WAVE");

pub const FMT: FourCC = FourCC::new(b"fmt ");
pub const DATA: FourCC = FourCC::new(b"data");
pub const LIST: FourCC = FourCC::new(b"LIST");

/// The only `LIST` type the walker descends into.
pub const INFO: FourCC = FourCC::new(b"INFO");

// INFO subchunks
pub const INAM: FourCC = FourCC::new(b"INAM");
pub const IART: FourCC = FourCC::new(b"IART");
pub const IPRD: FourCC = FourCC::new(b"IPRD");
pub const ICMT: FourCC = FourCC::new(b"ICMT");
pub const ICRD: FourCC = FourCC::new(b"ICRD");
pub const IGNR: FourCC = FourCC::new(b"IGNR");
pub const ICOP: FourCC = FourCC::new(b"ICOP");
pub const ISFT: FourCC = FourCC::new(b"ISFT");
pub const IENG: FourCC = FourCC::new(b"IENG");
pub const ITCH: FourCC = FourCC::new(b"ITCH");
pub const IKEY: FourCC = FourCC::new(b"IKEY");
pub const ISBJ: FourCC = FourCC::new(b"ISBJ");
pub const ISRC: FourCC = FourCC::new(b"ISRC");
pub const ITRK: FourCC = FourCC::new(b"ITRK");
pub const IPRT: FourCC = FourCC::new(b"IPRT");
