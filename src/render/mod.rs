//! Rendering module for exporting documents to other formats.

mod json;
mod options;
mod text;

pub use json::{from_json, to_json, JsonFormat};
pub use options::TextOptions;
pub use text::to_text;
