// ID3v1 tag implementation

use std::io::Read;

use crate::error::Result;
use crate::id3::genres;
use crate::metadata::Metadata;
use crate::utils::encoding::decode_latin1;
use crate::utils::io::read_array;

/// Everything after the "TAG" marker.
const BODY_SIZE: usize = Id3v1Tag::TAG_SIZE - 3;

/// ID3v1 tag structure
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Id3v1Tag {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub comment: String,
    /// Only present in ID3v1.1 tags.
    pub track: Option<u8>,
    pub genre: u8,
}

impl Id3v1Tag {
    pub const TAG_SIZE: usize = 128;
    pub const TAG_ID: &'static [u8; 3] = b"TAG";

    /// Read the tag body from a stream positioned right after "TAG".
    pub fn read_body<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let body = read_array::<_, BODY_SIZE>(reader)?;
        Ok(Self::parse(&body))
    }

    /// Parse ID3v1 tag body
    fn parse(body: &[u8; BODY_SIZE]) -> Self {
        let title = decode_latin1(&body[0..30]);
        let artist = decode_latin1(&body[30..60]);
        let album = decode_latin1(&body[60..90]);
        let year = decode_latin1(&body[90..94]);

        // ID3v1.1 keeps the track number in the last comment byte, behind a NUL
        let (comment, track) = if body[122] == 0 && body[123] != 0 {
            (decode_latin1(&body[94..122]), Some(body[123]))
        } else {
            (decode_latin1(&body[94..124]), None)
        };

        Id3v1Tag {
            title,
            artist,
            album,
            year,
            comment,
            track,
            genre: body[124],
        }
    }

    pub fn genre_name(&self) -> Option<&'static str> {
        genres::name(self.genre)
    }

    /// Non-empty fields as tag properties.
    pub fn into_metadata(self) -> Metadata {
        let mut metadata = Metadata::new();
        let genre = self.genre_name();

        for (name, value) in [
            ("Title", self.title),
            ("Artist", self.artist),
            ("Album", self.album),
            ("Year", self.year),
            ("Comment", self.comment),
        ] {
            if !value.is_empty() {
                metadata.insert(name, value);
            }
        }
        if let Some(track) = self.track {
            metadata.insert("Track", track.to_string());
        }
        if let Some(genre) = genre {
            metadata.insert("Genre", genre);
        }

        metadata
    }
}

/// Read a legacy tag block whose "TAG" marker has already been consumed.
pub fn read_legacy_tags<R: Read + ?Sized>(reader: &mut R) -> Result<Metadata> {
    Ok(Id3v1Tag::read_body(reader)?.into_metadata())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Cursor;

    fn field(text: &[u8], width: usize) -> Vec<u8> {
        let mut bytes = text.to_vec();
        bytes.resize(width, 0);
        bytes
    }

    fn body(comment: Vec<u8>, genre: u8) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(field(b"Paranoid Android", 30));
        bytes.extend(field(b"Radiohead", 30));
        bytes.extend(field(b"OK Computer", 30));
        bytes.extend_from_slice(b"1997");
        bytes.extend(comment);
        bytes.push(genre);
        bytes
    }

    #[test]
    fn test_read_v1() {
        let bytes = body(field(b"thirty characters of comment!!", 30), 17);
        assert_eq!(bytes.len(), 125);

        let tag = Id3v1Tag::read_body(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(tag.title, "Paranoid Android");
        assert_eq!(tag.comment, "thirty characters of comment!!");
        assert_eq!(tag.track, None);
        assert_eq!(tag.genre_name(), Some("Rock"));
    }

    #[test]
    fn test_read_v1_1_track() {
        let mut comment = field(b"short", 28);
        comment.extend_from_slice(&[0, 2]);
        let metadata = read_legacy_tags(&mut Cursor::new(body(comment, 17))).unwrap();

        assert_eq!(metadata.get("Title").unwrap(), "Paranoid Android");
        assert_eq!(metadata.get("Artist").unwrap(), "Radiohead");
        assert_eq!(metadata.get("Album").unwrap(), "OK Computer");
        assert_eq!(metadata.get("Year").unwrap(), "1997");
        assert_eq!(metadata.get("Comment").unwrap(), "short");
        assert_eq!(metadata.get("Track").unwrap(), "2");
        assert_eq!(metadata.get("Genre").unwrap(), "Rock");
    }

    #[test]
    fn test_empty_fields_and_unknown_genre_omitted() {
        let mut bytes = vec![0u8; 124];
        bytes.push(255);
        let metadata = read_legacy_tags(&mut Cursor::new(bytes)).unwrap();
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_truncated_tag() {
        match read_legacy_tags(&mut Cursor::new(vec![0u8; 60])) {
            Err(Error::ShortRead { expected: 125, actual: 60 }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
