//! Plain text rendering for OCR documents.

use crate::error::Result;
use crate::model::Document;

use super::TextOptions;

/// Convert a document to plain text.
///
/// Characters are emitted in reading order, page by page. Without a page
/// separator the result equals [`Document::plain_text`].
pub fn to_text(doc: &Document, options: &TextOptions) -> Result<String> {
    let mut output = String::with_capacity(doc.characters.len());

    for index in 0..doc.pages.len() {
        if index > 0 {
            if let Some(ref separator) = options.page_separator {
                output.push_str(separator);
            }
        }
        let Some(chars) = doc.page_characters(index) else {
            log::warn!("Page {} has a span outside the document, skipping", index);
            continue;
        };
        output.extend(
            chars
                .iter()
                .map(|c| c.as_char().unwrap_or(char::REPLACEMENT_CHARACTER))
                .filter(|c| !(options.strip_carriage_returns && *c == '\r')),
        );
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::from_utf8;

    #[test]
    fn test_to_text() {
        let text = "foo beer baz buz";
        let doc = from_utf8(text, 5, 2).unwrap();

        let result = to_text(&doc, &TextOptions::default()).unwrap();
        assert_eq!(result, text);
        assert_eq!(result, doc.plain_text());
    }

    #[test]
    fn test_to_text_page_separator() {
        let doc = from_utf8("foo beer baz buz", 5, 2).unwrap();

        let options = TextOptions::new().with_page_separator("\n---\n");
        let result = to_text(&doc, &options).unwrap();
        assert_eq!(result, "foo beer \n---\nbaz buz");
    }

    #[test]
    fn test_to_text_strip_carriage_returns() {
        let doc = from_utf8("foo\r\nbar", 80, 200).unwrap();

        let options = TextOptions::new().with_strip_carriage_returns(true);
        assert_eq!(to_text(&doc, &options).unwrap(), "foo\nbar");
    }

    #[test]
    fn test_to_text_empty_document() {
        let result = to_text(&Document::default(), &TextOptions::default()).unwrap();
        assert!(result.is_empty());
    }
}
