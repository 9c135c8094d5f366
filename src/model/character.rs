//! Character-level types.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in virtual pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x1: u32,
    /// Top edge
    pub y1: u32,
    /// Right edge
    pub x2: u32,
    /// Bottom edge
    pub y2: u32,
}

impl BoundingBox {
    /// Create a bounding box from its corners.
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a bounding box from its top-left corner and size.
    pub fn from_origin(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Get the width of the box.
    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    /// Get the height of the box.
    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }
}

/// A single glyph placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    /// Unicode scalar value
    pub codepoint: u32,

    /// Position on the page
    pub bounding_box: BoundingBox,
}

impl Character {
    /// Create a character placed in the given box.
    pub fn new(c: char, bounding_box: BoundingBox) -> Self {
        Self {
            codepoint: c as u32,
            bounding_box,
        }
    }

    /// Get the character, if the codepoint is a valid scalar value.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.codepoint)
    }

    /// Check if this is a carriage return or line feed.
    pub fn is_line_break(&self) -> bool {
        matches!(self.as_char(), Some('\r' | '\n'))
    }
}
