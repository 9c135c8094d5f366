//! Payload compression.

use crate::error::{Error, Result};
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Lossless byte-stream compressor used for container payloads.
///
/// The container does not record which algorithm produced a payload, so the
/// encoding and decoding side must agree on the implementation.
pub trait Compressor: Send + Sync {
    /// Get the name of this compressor.
    fn name(&self) -> &str;

    /// Compress a byte slice.
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decompress a byte slice produced by [`Compressor::compress`].
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Gzip compressor, the format used by every stored container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gzip {
    level: u32,
}

impl Gzip {
    /// Create a gzip compressor with the default level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set compression level (0-9). Values above 9 are clamped.
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level.min(9);
        self
    }

    /// Get the compression level.
    pub fn level(&self) -> u32 {
        self.level
    }
}

impl Default for Gzip {
    fn default() -> Self {
        Self {
            level: Compression::default().level(),
        }
    }
}

impl Compressor for Gzip {
    fn name(&self) -> &str {
        "gzip"
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(
            Vec::with_capacity(data.len() / 2),
            Compression::new(self.level),
        );
        encoder
            .write_all(data)
            .map_err(|e| Error::Compression(e.to_string()))?;
        encoder
            .finish()
            .map_err(|e| Error::Compression(e.to_string()))
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        // Concatenated gzip members are valid and decode as one stream.
        let mut decoder = MultiGzDecoder::new(data);
        let mut out = Vec::with_capacity(data.len().saturating_mul(3));
        decoder
            .read_to_end(&mut out)
            .map_err(|e| Error::Decompression(e.to_string()))?;
        Ok(out)
    }
}
