//! Document model types for OCR results.
//!
//! A document is a flat sequence of positioned characters plus page records
//! whose spans index into that sequence. The same model is produced by the
//! container decoder and the text synthesis engine.

mod character;
mod document;
mod page;
mod table;

pub use character::{BoundingBox, Character};
pub use document::{Decoded, Document};
pub use page::{Page, Span};
pub use table::{Table, TableCell};
