//! Document-level types.

use super::{Character, Page, Table, TableCell};
use serde::{Deserialize, Serialize};

/// An OCR result document.
///
/// `Document::default()` is the canonical empty document: zero version, no
/// digest and no pages, characters or tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Schema version tag
    pub version: u32,

    /// MD5 digest of the source text, for documents synthesized from text
    pub content_hash: Option<[u8; 16]>,

    /// Characters in reading order
    pub characters: Vec<Character>,

    /// Pages in the document
    pub pages: Vec<Page>,

    /// Tables recognised in the document
    pub tables: Vec<Table>,

    /// Cells of all tables
    pub table_cells: Vec<TableCell>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the document has no pages or no characters.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty() || self.characters.is_empty()
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get the number of characters in the document.
    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    /// Get a page by index (0-indexed).
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Get the characters belonging to a page.
    ///
    /// Returns `None` if the page does not exist or its span falls outside the
    /// character sequence.
    pub fn page_characters(&self, index: usize) -> Option<&[Character]> {
        let page = self.pages.get(index)?;
        self.characters.get(page.character_span.to_range())
    }

    /// Get the content hash as lowercase hex.
    pub fn content_hash_hex(&self) -> Option<String> {
        self.content_hash.map(hex::encode)
    }

    /// Get the text of the document by concatenating its codepoints.
    ///
    /// Codepoints that are not valid scalar values become U+FFFD.
    pub fn plain_text(&self) -> String {
        self.characters
            .iter()
            .map(|c| c.as_char().unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

/// Outcome of decoding a container.
///
/// Documents missing either pages or characters collapse to `Empty`, so
/// callers never see a half-populated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// The payload held no pages or no characters
    Empty,
    /// The payload held a usable document
    Populated(Document),
}

impl Decoded {
    /// Classify a freshly deserialized document.
    pub fn from_document(doc: Document) -> Self {
        if doc.is_empty() {
            Decoded::Empty
        } else {
            Decoded::Populated(doc)
        }
    }

    /// Check if the outcome is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Decoded::Empty)
    }

    /// Convert into a document, `Empty` becoming `Document::default()`.
    pub fn into_document(self) -> Document {
        match self {
            Decoded::Empty => Document::default(),
            Decoded::Populated(doc) => doc,
        }
    }
}

impl From<Decoded> for Document {
    fn from(decoded: Decoded) -> Self {
        decoded.into_document()
    }
}
