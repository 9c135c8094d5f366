//! Layout options for text synthesis.

use super::layout::{cell_offset, CHAR_HEIGHT, CHAR_WIDTH};
use crate::error::{Error, Result};

/// Default number of symbols per line.
pub const DEFAULT_LINE_LENGTH: usize = 80;

/// Default number of lines per page.
pub const DEFAULT_PAGE_LENGTH: usize = 200;

/// Options controlling how text is laid out on virtual pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Maximum number of symbols on a line
    pub line_length: usize,

    /// Maximum number of lines on a page
    pub page_length: usize,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of symbols on a line.
    pub fn with_line_length(mut self, line_length: usize) -> Self {
        self.line_length = line_length;
        self
    }

    /// Set the maximum number of lines on a page.
    pub fn with_page_length(mut self, page_length: usize) -> Self {
        self.page_length = page_length;
        self
    }

    /// Build options from optional positional arguments.
    ///
    /// No arguments selects the defaults, one sets the line length, two set
    /// the line and page lengths. Anything longer is rejected.
    pub fn from_args(args: &[i64]) -> Result<Self> {
        let options = Self::default();
        match *args {
            [] => Ok(options),
            [line] => Ok(options.with_line_length(positive(line, "line length")?)),
            [line, page] => Ok(options
                .with_line_length(positive(line, "line length")?)
                .with_page_length(positive(page, "page length")?)),
            _ => Err(Error::InvalidArgument(format!(
                "invalid number of arguments passed when creating new document from text: \
                 expected at most 2, got {}",
                args.len()
            ))),
        }
    }

    /// Check that both lengths are positive and the page extent fits in
    /// page coordinates.
    pub fn validate(&self) -> Result<()> {
        if self.line_length == 0 {
            return Err(Error::InvalidArgument(
                "cannot convert text to document: line length cannot be zero or lower".to_string(),
            ));
        }
        if self.page_length == 0 {
            return Err(Error::InvalidArgument(
                "cannot convert text to document: page length cannot be zero or lower".to_string(),
            ));
        }
        if cell_offset(self.line_length, CHAR_WIDTH).is_none() {
            return Err(Error::InvalidArgument(format!(
                "cannot convert text to document: line length {} exceeds the page width limit",
                self.line_length
            )));
        }
        if cell_offset(self.page_length, CHAR_HEIGHT).is_none() {
            return Err(Error::InvalidArgument(format!(
                "cannot convert text to document: page length {} exceeds the page height limit",
                self.page_length
            )));
        }
        Ok(())
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            line_length: DEFAULT_LINE_LENGTH,
            page_length: DEFAULT_PAGE_LENGTH,
        }
    }
}

fn positive(value: i64, what: &str) -> Result<usize> {
    usize::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| {
            Error::InvalidArgument(format!(
                "cannot convert text to document: {} cannot be zero or lower",
                what
            ))
        })
}
