//! # eocr
//!
//! Container codec and text layout engine for OCR results.
//!
//! OCR results are stored as a structured [`Document`] (characters with
//! bounding boxes, pages, tables) wrapped in a small binary container: a
//! 10-byte format header, a SHA-1 checksum and a gzip-compressed payload.
//! Plain text can be turned into a synthetic document by laying it out on
//! a fixed-width grid.
//!
//! ## Quick Start
//!
//! ```no_run
//! use eocr::{from_text, read_file, write_file, LayoutOptions};
//!
//! fn main() -> eocr::Result<()> {
//!     // Lay out plain text as an OCR document
//!     let doc = from_text("Hello, world!", &LayoutOptions::default())?;
//!
//!     // Store it in a container and read it back
//!     write_file("hello.eocr", &doc)?;
//!     let restored = read_file("hello.eocr")?;
//!     assert_eq!(restored, doc);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Container codec**: header sniffing, checksum verification, gzip payloads
//! - **Legacy headers**: files written under the predecessor header still decode
//! - **Text layout**: deterministic word-wrapping into pages of 10x10 cells
//! - **Export**: plain text and JSON rendering, document comparison

pub mod codec;
pub mod compare;
pub mod detect;
pub mod error;
pub mod model;
pub mod render;
pub mod text;

// Re-export commonly used types
pub use codec::{decode, encode, verify, Codec};
pub use compare::compare_documents;
pub use detect::{sniff, sniff_path, FormatId, FormatInfo, FormatRegistry};
pub use error::{Error, ErrorKind, Result};
pub use model::{BoundingBox, Character, Decoded, Document, Page, Span, Table, TableCell};
pub use render::{JsonFormat, TextOptions};
pub use text::LayoutOptions;

use std::fs;
use std::path::Path;

/// Read and decode a container file.
///
/// # Example
///
/// ```no_run
/// use eocr::read_file;
///
/// let doc = read_file("scan.eocr").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    log::debug!("Reading container {}", path.display());
    let data = fs::read(path)?;
    decode(&data)
}

/// Encode a document and write the container to a file.
///
/// The file is written in the current format regardless of its extension.
pub fn write_file<P: AsRef<Path>>(path: P, doc: &Document) -> Result<()> {
    let path = path.as_ref();
    let data = encode(doc)?;
    log::debug!("Writing {} bytes to {}", data.len(), path.display());
    fs::write(path, data)?;
    Ok(())
}

/// Lay out plain text as a document.
///
/// # Example
///
/// ```
/// use eocr::{from_text, LayoutOptions};
///
/// let options = LayoutOptions::new().with_line_length(5).with_page_length(2);
/// let doc = from_text("foo beer baz buz", &options).unwrap();
/// assert_eq!(doc.page_count(), 2);
/// ```
pub fn from_text(content: &str, options: &LayoutOptions) -> Result<Document> {
    text::synthesize(content, options)
}

/// Lay out plain text using zero, one or two positional length arguments.
///
/// The first argument is the line length and the second the page length;
/// missing ones fall back to the defaults.
pub fn from_text_with_args(content: &str, args: &[i64]) -> Result<Document> {
    let options = LayoutOptions::from_args(args)?;
    from_text(content, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_defaults() {
        let doc = from_text("foo bar baz", &LayoutOptions::default()).unwrap();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.character_count(), 11);
        assert_eq!(doc.pages[0].width, 800);
    }

    #[test]
    fn test_from_text_with_args() {
        let doc = from_text_with_args("foo beer baz buz", &[5, 2]).unwrap();
        assert_eq!(doc.page_count(), 2);

        let doc = from_text_with_args("foo beer baz buz", &[5]).unwrap();
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_from_text_with_args_invalid() {
        assert!(matches!(
            from_text_with_args("foo", &[1, 2, 3]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            from_text_with_args("foo", &[-1]),
            Err(Error::InvalidArgument(_))
        ));
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_decode_empty_data() {
        let result = decode(&[]);
        assert!(matches!(result, Err(Error::TooSmall)));
    }

    #[test]
    fn test_decode_unknown_magic() {
        let data = [0xFFu8; 64];
        assert!(matches!(decode(&data), Err(Error::InvalidHeader)));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_file("does/not/exist.eocr");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_sniff_encoded() {
        let doc = from_text("foo", &LayoutOptions::default()).unwrap();
        let data = encode(&doc).unwrap();
        assert_eq!(sniff(&data), FormatId::Eocr);
    }
}
