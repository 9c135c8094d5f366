//! Integration and property tests for text layout.

use md5::{Digest, Md5};
use proptest::prelude::*;

use eocr::text::{from_utf8, CHAR_HEIGHT, CHAR_WIDTH, DOCUMENT_VERSION, PAGE_DPI};
use eocr::{decode, encode, from_text, from_text_with_args, Document, ErrorKind, LayoutOptions};

/// Page index of every character, taken from the page spans.
fn page_of_characters(doc: &Document) -> Vec<usize> {
    let mut pages = vec![usize::MAX; doc.characters.len()];
    for (index, page) in doc.pages.iter().enumerate() {
        for slot in &mut pages[page.character_span.to_range()] {
            *slot = index;
        }
    }
    pages
}

#[test]
fn test_lorem_ipsum_pages() {
    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
                tempor incididunt ut labore et dolore magna aliqua.";
    let doc = from_utf8(text, 20, 3).unwrap();

    assert_eq!(doc.plain_text(), text);
    assert_eq!(doc.page_count(), 3);
    for page in &doc.pages {
        assert_eq!(page.dimensions(), (200, 30));
        assert_eq!(page.dpi_x, PAGE_DPI);
        assert_eq!(page.dpi_y, PAGE_DPI);
    }
    assert_eq!(doc.version, DOCUMENT_VERSION);
}

#[test]
fn test_default_layout() {
    let doc = from_text("hello", &LayoutOptions::default()).unwrap();
    assert_eq!(doc.pages[0].dimensions(), (800, 2000));
}

#[test]
fn test_positional_args() {
    let two = from_text_with_args("foo beer baz buz", &[5, 2]).unwrap();
    assert_eq!(two, from_utf8("foo beer baz buz", 5, 2).unwrap());

    let err = from_text_with_args("foo", &[5, 2, 1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);

    let err = from_text_with_args("foo", &[5, 0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
}

#[test]
fn test_synthesized_document_survives_container() {
    let doc = from_utf8("収容人数 ：消防法 上の定員", 4, 2).unwrap();
    assert_eq!(decode(&encode(&doc).unwrap()).unwrap(), doc);
}

#[test]
fn test_empty_text_container_is_empty() {
    let doc = from_utf8("", 80, 200).unwrap();
    assert_eq!(doc.page_count(), 1);
    assert!(doc.is_empty());
    assert_eq!(decode(&encode(&doc).unwrap()).unwrap(), Document::default());
}

fn layout_text() -> impl Strategy<Value = String> {
    "[a-z \n\r\t日本]{0,200}"
}

proptest! {
    /// Every input character is placed exactly once, in order
    #[test]
    fn layout_preserves_text(text in layout_text(), line in 1usize..20, page in 1usize..10) {
        let doc = from_utf8(&text, line, page).unwrap();
        prop_assert_eq!(doc.character_count(), text.chars().count());
        prop_assert_eq!(doc.plain_text(), text);
    }

    /// Page spans tile the character list without gaps
    #[test]
    fn layout_spans_are_contiguous(text in layout_text(), line in 1usize..20, page in 1usize..10) {
        let doc = from_utf8(&text, line, page).unwrap();
        prop_assert!(!doc.pages.is_empty());
        prop_assert_eq!(doc.pages[0].character_span.start, 0);
        for pair in doc.pages.windows(2) {
            prop_assert_eq!(pair[0].character_span.end, pair[1].character_span.start);
            prop_assert!(!pair[1].character_span.is_empty());
        }
        let last = doc.pages.last().unwrap();
        prop_assert_eq!(last.character_span.end as usize, doc.characters.len());
    }

    /// Characters are fixed-size cells inside their page
    #[test]
    fn layout_boxes_fit_pages(text in layout_text(), line in 1usize..20, page in 1usize..10) {
        let doc = from_utf8(&text, line, page).unwrap();
        let pages = page_of_characters(&doc);
        for (c, index) in doc.characters.iter().zip(pages) {
            let bbox = c.bounding_box;
            prop_assert_eq!(bbox.width(), CHAR_WIDTH);
            prop_assert_eq!(bbox.height(), CHAR_HEIGHT);
            prop_assert!(bbox.x2 <= doc.pages[index].width);
            prop_assert!(bbox.y2 <= doc.pages[index].height);
        }
        for p in &doc.pages {
            prop_assert!(p.width >= CHAR_WIDTH * line as u32);
            prop_assert_eq!(p.height, CHAR_HEIGHT * page as u32);
        }
    }

    /// Tokens that fit on a line are never split
    #[test]
    fn layout_keeps_short_tokens_whole(text in layout_text(), line in 1usize..20, page in 1usize..10) {
        let doc = from_utf8(&text, line, page).unwrap();
        let pages = page_of_characters(&doc);
        let chars: Vec<char> = text.chars().collect();

        let mut start = 0;
        while start < chars.len() {
            if chars[start].is_whitespace() {
                start += 1;
                continue;
            }
            let end = (start..chars.len())
                .find(|&i| chars[i].is_whitespace())
                .unwrap_or(chars.len());
            if end - start <= line {
                for i in start + 1..end {
                    let prev = doc.characters[i - 1].bounding_box;
                    let cur = doc.characters[i].bounding_box;
                    prop_assert_eq!(pages[i - 1], pages[i]);
                    prop_assert_eq!(prev.y1, cur.y1);
                    prop_assert_eq!(prev.x2, cur.x1);
                }
            }
            start = end;
        }
    }

    /// The content hash is the MD5 of the input bytes
    #[test]
    fn layout_hashes_input(text in layout_text()) {
        let doc = from_utf8(&text, 80, 200).unwrap();
        let expected: [u8; 16] = Md5::digest(text.as_bytes()).into();
        prop_assert_eq!(doc.content_hash, Some(expected));
    }

    /// Layout is a pure function of its inputs
    #[test]
    fn layout_is_deterministic(text in layout_text(), line in 1usize..20, page in 1usize..10) {
        prop_assert_eq!(from_utf8(&text, line, page).unwrap(), from_utf8(&text, line, page).unwrap());
    }
}
