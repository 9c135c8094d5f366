//! Table structure types.
//!
//! Tables are auxiliary structure recognised on scanned pages. They do not own
//! characters; cells reference them through spans like pages do.

use super::{BoundingBox, Span};
use serde::{Deserialize, Serialize};

/// A table detected on a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Index of the page holding the table
    pub page: u32,

    /// Table extent on the page
    pub bounding_box: BoundingBox,

    /// Cells of this table, as a range into the document's table cells
    pub cell_span: Span,
}

impl Table {
    /// Get the number of cells in the table.
    pub fn cell_count(&self) -> usize {
        self.cell_span.len()
    }
}

/// A single table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Row index (0-indexed)
    pub row: u32,

    /// Column index (0-indexed)
    pub column: u32,

    /// Number of rows covered
    pub row_span: u32,

    /// Number of columns covered
    pub column_span: u32,

    /// Cell extent on the page
    pub bounding_box: BoundingBox,

    /// Characters inside the cell
    pub character_span: Span,
}

impl TableCell {
    /// Create a single-row, single-column cell.
    pub fn new(row: u32, column: u32) -> Self {
        Self {
            row,
            column,
            row_span: 1,
            column_span: 1,
            bounding_box: BoundingBox::default(),
            character_span: Span::default(),
        }
    }

    /// Check if this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.row_span > 1 || self.column_span > 1
    }
}

impl Default for TableCell {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
