//! Page-level types.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Half-open range `[start, end)` over a document's characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// First index in the span
    pub start: u32,
    /// One past the last index
    pub end: u32,
}

impl Span {
    /// Create a new span.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create an empty span positioned at `at`.
    pub fn empty_at(at: u32) -> Self {
        Self::new(at, at)
    }

    /// Number of indices covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start) as usize
    }

    /// Check if the span covers nothing.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Convert to a `usize` range for slicing.
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

/// Layout metadata for one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    /// Horizontal resolution
    pub dpi_x: u32,

    /// Vertical resolution
    pub dpi_y: u32,

    /// Page width in virtual pixels
    pub width: u32,

    /// Page height in virtual pixels
    pub height: u32,

    /// Characters belonging to this page
    pub character_span: Span,
}

impl Page {
    /// Create a new page with no characters, starting at `start`.
    pub fn new(width: u32, height: u32, dpi: u32, start: u32) -> Self {
        Self {
            dpi_x: dpi,
            dpi_y: dpi,
            width,
            height,
            character_span: Span::empty_at(start),
        }
    }

    /// Get the number of characters on the page.
    pub fn character_count(&self) -> usize {
        self.character_span.len()
    }

    /// Check if the page holds no characters.
    pub fn is_empty(&self) -> bool {
        self.character_span.is_empty()
    }

    /// Get page dimensions as (width, height) tuple.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page = Page::new(700, 100, 300, 5);
        assert_eq!(page.dpi_x, 300);
        assert_eq!(page.dpi_y, 300);
        assert_eq!(page.dimensions(), (700, 100));
        assert_eq!(page.character_span, Span::new(5, 5));
        assert!(page.is_empty());
    }

    #[test]
    fn test_span() {
        let span = Span::new(9, 16);
        assert_eq!(span.len(), 7);
        assert_eq!(span.to_range(), 9..16);
        assert!(!span.is_empty());
        assert!(Span::empty_at(3).is_empty());
    }

    #[test]
    fn test_inverted_span_is_empty() {
        let span = Span::new(5, 2);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }
}
