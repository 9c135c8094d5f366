//! Binary container codec.
//!
//! A container wraps a serialized document in a fixed envelope:
//!
//! ```text
//! [0..10)   magic header, format specific
//! [10..30)  SHA-1 of bytes [30..)
//! [30..)    compressed serialized document
//! ```
//!
//! Encoding always writes the codec's current header. Decoding accepts the
//! current header and the header of its direct legacy predecessor.
//!
//! # Example
//!
//! ```
//! use eocr::codec::Codec;
//! use eocr::text::{synthesize, LayoutOptions};
//!
//! fn main() -> eocr::Result<()> {
//!     let doc = synthesize("hello world", &LayoutOptions::default())?;
//!     let codec = Codec::new();
//!
//!     let data = codec.encode(&doc)?;
//!     assert_eq!(codec.decode(&data)?, doc);
//!     Ok(())
//! }
//! ```

mod compression;
mod serialization;

pub use compression::{Compressor, Gzip};
pub use serialization::{Bincode, PayloadSerializer};

use crate::detect::{FormatId, FormatInfo, Generation, EOCR, HEADER_LEN};
use crate::error::{Error, Result};
use crate::model::{Decoded, Document};
use sha1::{Digest, Sha1};

/// Length of the SHA-1 checksum following the header.
pub const CHECKSUM_LEN: usize = 20;

/// Offset of the compressed payload; also the minimum container size.
pub const PAYLOAD_OFFSET: usize = HEADER_LEN + CHECKSUM_LEN;

/// Compute the container checksum of a compressed payload.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    Sha1::digest(payload).into()
}

/// Encoder and decoder for one container format.
#[derive(Debug, Clone)]
pub struct Codec<S = Bincode, C = Gzip> {
    format: &'static FormatInfo,
    legacy: Option<&'static FormatInfo>,
    serializer: S,
    compressor: C,
}

impl Codec {
    /// Create a codec for OCR result containers.
    pub fn new() -> Self {
        Self::from_info(&EOCR)
    }

    /// Create a codec for a current-generation format.
    ///
    /// Legacy formats can be read by the codec of their successor but never
    /// written, so asking for one is an argument error.
    pub fn for_format(id: FormatId) -> Result<Self> {
        match id.info() {
            Some(info) if info.generation == Generation::Current => Ok(Self::from_info(info)),
            Some(_) => Err(Error::InvalidArgument(format!(
                "{} is a legacy format and cannot be encoded",
                id
            ))),
            None => Err(Error::InvalidArgument(
                "no codec for unknown format".to_string(),
            )),
        }
    }

    fn from_info(format: &'static FormatInfo) -> Self {
        Self {
            format,
            legacy: format.predecessor.and_then(FormatId::info),
            serializer: Bincode,
            compressor: Gzip::default(),
        }
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PayloadSerializer, C: Compressor> Codec<S, C> {
    /// Replace the payload serializer.
    pub fn with_serializer<S2: PayloadSerializer>(self, serializer: S2) -> Codec<S2, C> {
        Codec {
            format: self.format,
            legacy: self.legacy,
            serializer,
            compressor: self.compressor,
        }
    }

    /// Replace the payload compressor.
    pub fn with_compressor<C2: Compressor>(self, compressor: C2) -> Codec<S, C2> {
        Codec {
            format: self.format,
            legacy: self.legacy,
            serializer: self.serializer,
            compressor,
        }
    }

    /// Get the format written by this codec.
    pub fn format(&self) -> FormatId {
        self.format.id
    }

    /// Get the legacy format this codec can also read.
    pub fn legacy_format(&self) -> Option<FormatId> {
        self.legacy.map(|info| info.id)
    }

    /// Check if a header is one this codec decodes.
    pub fn supports_header(&self, header: &[u8]) -> bool {
        std::iter::once(self.format)
            .chain(self.legacy)
            .any(|info| info.magic.as_slice() == header)
    }

    /// Check the integrity of a serialized document.
    ///
    /// Fails with `TooSmall` when there is no room for header and checksum,
    /// `InvalidHeader` when the header is not supported by this codec and
    /// `InvalidChecksum` when the payload does not match the stored checksum.
    pub fn verify(&self, data: &[u8]) -> Result<()> {
        if data.len() < PAYLOAD_OFFSET {
            return Err(Error::TooSmall);
        }
        if !self.supports_header(&data[..HEADER_LEN]) {
            return Err(Error::InvalidHeader);
        }
        if checksum(&data[PAYLOAD_OFFSET..]) != data[HEADER_LEN..PAYLOAD_OFFSET] {
            return Err(Error::InvalidChecksum);
        }
        Ok(())
    }

    /// Decode a container into a tagged outcome.
    pub fn decode_outcome(&self, data: &[u8]) -> Result<Decoded> {
        self.verify(data)?;
        let message = self.compressor.decompress(&data[PAYLOAD_OFFSET..])?;
        let doc = self.serializer.deserialize(&message)?;
        log::debug!(
            "Decoded {} container: {} payload bytes, {} pages, {} characters",
            self.format.id,
            message.len(),
            doc.pages.len(),
            doc.characters.len()
        );

        let decoded = Decoded::from_document(doc);
        if decoded.is_empty() {
            log::debug!("Document has zero pages or characters, returning empty document");
        }
        Ok(decoded)
    }

    /// Decode a container into a document.
    ///
    /// A payload with no pages or no characters yields `Document::default()`.
    pub fn decode(&self, data: &[u8]) -> Result<Document> {
        self.decode_outcome(data).map(Decoded::into_document)
    }

    /// Encode a document into a container with the current header.
    pub fn encode(&self, doc: &Document) -> Result<Vec<u8>> {
        let message = self.serializer.serialize(doc)?;
        let payload = self.compressor.compress(&message)?;
        let sum = checksum(&payload);

        let mut data = Vec::with_capacity(PAYLOAD_OFFSET + payload.len());
        data.extend_from_slice(self.format.magic);
        data.extend_from_slice(&sum);
        data.extend_from_slice(&payload);

        log::debug!(
            "Encoded {} container: {} {} payload bytes compressed to {} with {}",
            self.format.id,
            message.len(),
            self.serializer.name(),
            payload.len(),
            self.compressor.name()
        );
        Ok(data)
    }
}

/// Check the integrity of an OCR result container.
pub fn verify(data: &[u8]) -> Result<()> {
    Codec::new().verify(data)
}

/// Decode an OCR result container.
pub fn decode(data: &[u8]) -> Result<Document> {
    Codec::new().decode(data)
}

/// Encode a document as an OCR result container.
pub fn encode(doc: &Document) -> Result<Vec<u8>> {
    Codec::new().encode(doc)
}
