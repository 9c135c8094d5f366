//! Text to document synthesis.
//!
//! Plain text is converted to a document by virtually "printing" it in a
//! fixed-width font: every character gets a 10x10 cell, lines hold at most
//! `line_length` symbols and pages at most `page_length` lines. Tokens are
//! kept whole where they fit on a line.

mod layout;
mod options;

pub use layout::{from_utf8, synthesize, CHAR_HEIGHT, CHAR_WIDTH, DOCUMENT_VERSION, PAGE_DPI};
pub use options::{LayoutOptions, DEFAULT_LINE_LENGTH, DEFAULT_PAGE_LENGTH};
