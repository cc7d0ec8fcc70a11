// Legacy ID3v1 tag handling module
pub mod genres;
pub mod v1;

pub use v1::{read_legacy_tags, Id3v1Tag};
