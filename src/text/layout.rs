//! Fixed-width "printing" of text onto virtual pages.

use super::LayoutOptions;
use crate::error::Result;
use crate::model::{BoundingBox, Character, Document, Page};
use md5::{Digest, Md5};

/// Width of a virtual character cell.
pub const CHAR_WIDTH: u32 = 10;

/// Height of a virtual character cell.
pub const CHAR_HEIGHT: u32 = 10;

/// Resolution of virtual pages.
pub const PAGE_DPI: u32 = 300;

/// Schema version written on synthesized documents.
pub const DOCUMENT_VERSION: u32 = 3;

/// Offset of the `cells`-th cell along an axis, if it fits in page coordinates.
pub(crate) fn cell_offset(cells: usize, size: u32) -> Option<u32> {
    u32::try_from(cells).ok()?.checked_mul(size)
}

/// Convert text to a document with explicit line and page lengths.
///
/// Fails with `InvalidArgument` if either length is zero.
///
/// # Example
///
/// ```
/// use eocr::text::from_utf8;
///
/// let doc = from_utf8("foo beer baz buz", 5, 10).unwrap();
/// assert_eq!(doc.characters.len(), 16);
/// assert_eq!(doc.pages[0].width, 50);
/// ```
pub fn from_utf8(s: &str, line_length: usize, page_length: usize) -> Result<Document> {
    let options = LayoutOptions::new()
        .with_line_length(line_length)
        .with_page_length(page_length);
    synthesize(s, &options)
}

/// Convert text to a document by laying it out in a fixed-width font.
///
/// Tokens (runs of non-whitespace) are not split across lines unless they
/// are longer than a whole line, in which case the line overflows and the
/// page is widened to fit. Line feeds always start a new line. Carriage
/// returns and line feeds take a character slot but no horizontal space.
pub fn synthesize(s: &str, options: &LayoutOptions) -> Result<Document> {
    options.validate()?;

    let mut printer = Printer::new(options);
    let mut token_len = runes_until_next_whitespace(s);
    let mut token_left = token_len;
    for (i, c) in s.char_indices() {
        if token_left == 0 {
            token_len = runes_until_next_whitespace(&s[i..]);
            token_left = token_len;
        }
        if is_line_break(c, printer.line_char_pos, token_len, token_left, options.line_length) {
            printer.break_line();
        }
        printer.place(c);
        token_left = token_left.saturating_sub(1);
    }

    log::debug!(
        "Synthesized {} characters on {} pages ({} line breaks)",
        printer.characters.len(),
        printer.pages.len(),
        printer.line_breaks
    );
    Ok(printer.finish(s))
}

/// Cursor state while printing.
struct Printer {
    line_length: usize,
    page_length: usize,
    characters: Vec<Character>,
    pages: Vec<Page>,
    line_char_pos: usize,
    page_line_pos: usize,
    line_breaks: usize,
}

impl Printer {
    fn new(options: &LayoutOptions) -> Self {
        let mut printer = Self {
            line_length: options.line_length,
            page_length: options.page_length,
            characters: Vec::new(),
            pages: Vec::with_capacity(1),
            line_char_pos: 0,
            page_line_pos: 0,
            line_breaks: 0,
        };
        printer.start_page();
        printer
    }

    fn start_page(&mut self) {
        // Both lengths passed validation, so the extents fit.
        let width = cell_offset(self.line_length, CHAR_WIDTH).unwrap_or(u32::MAX);
        let height = cell_offset(self.page_length, CHAR_HEIGHT).unwrap_or(u32::MAX);
        let start = u32::try_from(self.characters.len()).unwrap_or(u32::MAX);
        self.pages.push(Page::new(width, height, PAGE_DPI, start));
    }

    /// Move to the start of the next line, starting a new page past the last line.
    fn break_line(&mut self) {
        self.line_char_pos = 0;
        self.page_line_pos += 1;
        self.line_breaks += 1;
        if self.page_line_pos >= self.page_length {
            self.page_line_pos = 0;
            self.start_page();
        }
    }

    fn place(&mut self, c: char) {
        // Overlong tokens can run past the page edge; clamp at the coordinate limit.
        let x = cell_offset(self.line_char_pos, CHAR_WIDTH).unwrap_or(u32::MAX - CHAR_WIDTH);
        let y = cell_offset(self.page_line_pos, CHAR_HEIGHT).unwrap_or(u32::MAX - CHAR_HEIGHT);
        self.characters.push(Character::new(
            c,
            BoundingBox::from_origin(x, y, CHAR_WIDTH, CHAR_HEIGHT),
        ));
        if c != '\r' && c != '\n' {
            self.line_char_pos += 1;
        }

        let end = u32::try_from(self.characters.len()).unwrap_or(u32::MAX);
        let overflowed = self.line_char_pos >= self.line_length;
        if let Some(page) = self.pages.last_mut() {
            page.character_span.end = end;
            // Overlong tokens run past the nominal line width.
            if overflowed {
                page.width = page.width.max(x.saturating_add(CHAR_WIDTH));
            }
        }
    }

    fn finish(self, s: &str) -> Document {
        Document {
            version: DOCUMENT_VERSION,
            content_hash: Some(Md5::digest(s.as_bytes()).into()),
            characters: self.characters,
            pages: self.pages,
            tables: Vec::new(),
            table_cells: Vec::new(),
        }
    }
}

/// Count the characters before the next whitespace character or end of string.
fn runes_until_next_whitespace(s: &str) -> usize {
    s.chars().take_while(|c| !c.is_whitespace()).count()
}

/// Decide whether `c` starts on a new line.
///
/// `token_len` is the length of the token containing `c` and `token_left`
/// the number of its characters not yet placed, `c` included.
fn is_line_break(
    c: char,
    line_char_pos: usize,
    token_len: usize,
    token_left: usize,
    line_length: usize,
) -> bool {
    if c == '\n' {
        return true;
    }
    if token_len > line_length {
        return false;
    }
    line_char_pos + token_left > line_length || line_char_pos >= line_length
}
