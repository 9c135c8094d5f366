//! Payload serialization.

use crate::error::{Error, Result};
use crate::model::Document;

/// Converts documents to and from the uncompressed payload bytes.
///
/// The payload schema belongs to the serializer; the codec only moves bytes.
pub trait PayloadSerializer: Send + Sync {
    /// Get the name of this serializer.
    fn name(&self) -> &str;

    /// Serialize a document.
    fn serialize(&self, doc: &Document) -> Result<Vec<u8>>;

    /// Deserialize a document, failing on malformed input.
    fn deserialize(&self, data: &[u8]) -> Result<Document>;
}

/// Compact binary serializer built on bincode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bincode;

impl PayloadSerializer for Bincode {
    fn name(&self) -> &str {
        "bincode"
    }

    fn serialize(&self, doc: &Document) -> Result<Vec<u8>> {
        bincode::serialize(doc).map_err(|e| Error::Serialize(e.to_string()))
    }

    fn deserialize(&self, data: &[u8]) -> Result<Document> {
        Ok(bincode::deserialize(data)?)
    }
}
