//! ID3v1 trailer tag extraction.
//!
//! An ID3v1 tag occupies the last 128 bytes of an MP3 file. It starts with the
//! literal bytes `TAG`, followed by a fixed 30-byte title field. The title is
//! stored in ISO-8859-1, padded with spaces or NUL bytes depending on the
//! program that wrote it.
//!
//! This module only reads the title. It never writes to the source.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Size of the trailer block in bytes.
pub const TAG_SIZE: usize = 128;

/// Identifier every ID3v1 block starts with.
pub const TAG_MAGIC: &[u8; 3] = b"TAG";

/// Byte offset of the title field inside the block.
pub const TITLE_OFFSET: usize = 3;

/// Width of the title field in bytes.
pub const TITLE_LENGTH: usize = 30;

/// Why a source carries no ID3v1 tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absence {
    /// The source is shorter than one tag block.
    TooShort { len: u64 },
    /// The trailer does not start with `TAG`.
    NoMagic,
}

impl std::fmt::Display for Absence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Absence::TooShort { len } => {
                write!(f, "file too short for an ID3v1 tag ({} bytes)", len)
            }
            Absence::NoMagic => write!(f, "no ID3v1 tag identifier"),
        }
    }
}

/// Result of looking for a title in a byte source.
///
/// `Present("")` means a tag exists but its title field is blank, which is a
/// different situation from a source that has no tag at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleLookup {
    Present(String),
    Absent(Absence),
}

impl TitleLookup {
    /// Returns the title if a tag was found.
    pub fn title(&self) -> Option<&str> {
        match self {
            TitleLookup::Present(title) => Some(title),
            TitleLookup::Absent(_) => None,
        }
    }
}

/// Failure to read the trailer block.
///
/// These are fatal for the file being read, never a "no tag" answer.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("short read: expected {expected} bytes, got {got}")]
    ShortRead { expected: usize, got: usize },
}

/// Extracts the ID3v1 title from a seekable byte source.
///
/// The source length is taken by seeking to its end. Sources shorter than
/// [`TAG_SIZE`] and trailers without the `TAG` identifier yield
/// [`TitleLookup::Absent`]. A read that returns fewer than [`TAG_SIZE`] bytes
/// after the length check is an [`ExtractError::ShortRead`].
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use retitle::id3v1::{extract_title, TitleLookup};
///
/// let mut block = vec![0u8; 128];
/// block[..3].copy_from_slice(b"TAG");
/// block[3..8].copy_from_slice(b"Intro");
///
/// let lookup = extract_title(&mut Cursor::new(block)).unwrap();
/// assert_eq!(lookup, TitleLookup::Present("Intro".to_string()));
/// ```
pub fn extract_title<R: Read + Seek>(source: &mut R) -> Result<TitleLookup, ExtractError> {
    let len = source.seek(SeekFrom::End(0))?;
    if len < TAG_SIZE as u64 {
        return Ok(TitleLookup::Absent(Absence::TooShort { len }));
    }

    source.seek(SeekFrom::Start(len - TAG_SIZE as u64))?;

    let mut block = [0u8; TAG_SIZE];
    read_block(source, &mut block)?;

    if &block[..TITLE_OFFSET] != TAG_MAGIC {
        return Ok(TitleLookup::Absent(Absence::NoMagic));
    }

    let field = &block[TITLE_OFFSET..TITLE_OFFSET + TITLE_LENGTH];
    Ok(TitleLookup::Present(decode_title(field)))
}

/// Opens `path` read-only and extracts its ID3v1 title.
pub fn read_title(path: &Path) -> Result<TitleLookup, ExtractError> {
    let mut file = File::open(path)?;
    extract_title(&mut file)
}

/// Decodes a raw title field.
///
/// Every byte maps to the code point of the same value (ISO-8859-1). The
/// result is trimmed first, then cut at the first NUL left inside it.
pub fn decode_title(field: &[u8]) -> String {
    let raw: String = field.iter().map(|&b| b as char).collect();
    let trimmed = raw.trim_matches(is_blank);

    match trimmed.find('\0') {
        Some(idx) => trimmed[..idx].to_string(),
        None => trimmed.to_string(),
    }
}

// Space and everything below it. High bytes such as 0xA0 are title text.
fn is_blank(c: char) -> bool {
    c <= ' '
}

fn read_block<R: Read>(source: &mut R, buf: &mut [u8]) -> Result<(), ExtractError> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(ExtractError::ShortRead {
                    expected: buf.len(),
                    got: filled,
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
