//! Document comparison.
//!
//! Compares the summary properties of two documents (digest, page, character
//! and table counts, version) and reports every difference in one message.

use crate::error::{Error, Result};
use crate::model::Document;
use std::fmt::Display;

fn format_hash(hash: Option<[u8; 16]>) -> String {
    hash.map_or_else(|| "none".to_string(), hex::encode)
}

fn push_difference(
    messages: &mut Vec<String>,
    what: &str,
    input: impl Display,
    reference: impl Display,
) {
    messages.push(format!("Difference in {}:", what));
    messages.push(format!("(input: {}", input));
    messages.push(format!("reference: {})", reference));
}

/// Check if two documents are identical by comparing their properties.
///
/// Returns `Error::Mismatch` describing all differences, space separated.
///
/// # Example
///
/// ```
/// use eocr::compare::compare_documents;
/// use eocr::text::from_utf8;
///
/// let a = from_utf8("foo bar", 80, 200).unwrap();
/// let b = from_utf8("foo baz", 80, 200).unwrap();
/// assert!(compare_documents(&a, &a).is_ok());
/// assert!(compare_documents(&a, &b).is_err());
/// ```
pub fn compare_documents(input: &Document, reference: &Document) -> Result<()> {
    let mut messages = Vec::new();

    if input.content_hash.is_none() || reference.content_hash.is_none() {
        messages.push(format!(
            "invalid/corrupted documents: MD5 for input: {}, MD5 for reference: {}",
            format_hash(input.content_hash),
            format_hash(reference.content_hash)
        ));
    }
    if input.pages.len() != reference.pages.len() {
        push_difference(
            &mut messages,
            "number of pages",
            input.pages.len(),
            reference.pages.len(),
        );
    }
    if input.characters.len() != reference.characters.len() {
        push_difference(
            &mut messages,
            "number of characters",
            input.characters.len(),
            reference.characters.len(),
        );
    }
    if input.version != reference.version {
        push_difference(&mut messages, "version", input.version, reference.version);
    }
    if input.tables.len() != reference.tables.len() {
        push_difference(
            &mut messages,
            "number of tables",
            input.tables.len(),
            reference.tables.len(),
        );
    }
    if input.table_cells.len() != reference.table_cells.len() {
        push_difference(
            &mut messages,
            "number of table cells",
            input.table_cells.len(),
            reference.table_cells.len(),
        );
    }
    if input.content_hash != reference.content_hash {
        push_difference(
            &mut messages,
            "MD5",
            format_hash(input.content_hash),
            format_hash(reference.content_hash),
        );
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(Error::Mismatch(messages.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableCell;
    use crate::text::from_utf8;

    #[test]
    fn test_identical_documents() {
        let doc = from_utf8("foo beer baz buz", 5, 2).unwrap();
        assert!(compare_documents(&doc, &doc.clone()).is_ok());
    }

    #[test]
    fn test_missing_hash() {
        let doc = from_utf8("foo", 80, 200).unwrap();
        let mut other = doc.clone();
        other.content_hash = None;

        let err = compare_documents(&doc, &other).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("invalid/corrupted documents"));
        assert!(message.contains("MD5 for reference: none"));
        assert!(message.contains("Difference in MD5:"));
    }

    #[test]
    fn test_reports_all_differences() {
        let input = from_utf8("foo beer baz buz", 5, 2).unwrap();
        let mut reference = from_utf8("foo", 80, 200).unwrap();
        reference.version = 2;
        reference.table_cells.push(TableCell::new(0, 0));

        let message = compare_documents(&input, &reference).unwrap_err().to_string();
        assert!(message.contains("Difference in number of pages: (input: 2 reference: 1)"));
        assert!(message.contains("Difference in number of characters: (input: 16 reference: 3)"));
        assert!(message.contains("Difference in version: (input: 3 reference: 2)"));
        assert!(message.contains("Difference in number of table cells: (input: 0 reference: 1)"));
        assert!(!message.contains("number of tables:"));
        assert!(message.contains("Difference in MD5:"));
    }

    #[test]
    fn test_mismatch_kind() {
        let a = from_utf8("a", 80, 200).unwrap();
        let b = from_utf8("b", 80, 200).unwrap();
        let err = compare_documents(&a, &b).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Mismatch);
    }
}
