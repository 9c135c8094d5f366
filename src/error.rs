//! Error types for eocr library.

use std::io;
use thiserror::Error;

/// Result type alias for eocr operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while encoding, decoding or synthesizing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Layout constraints or other arguments are out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The data is too short to hold a header and checksum.
    #[error("Data too small to be OCR results")]
    TooSmall,

    /// The header is corrupt, missing or belongs to an unsupported format.
    #[error("Data has missing or corrupt header")]
    InvalidHeader,

    /// The payload does not match the stored checksum.
    #[error("Data doesn't match checksum")]
    InvalidChecksum,

    /// Error compressing the payload.
    #[error("Compression error: {0}")]
    Compression(String),

    /// Error decompressing a payload that passed verification.
    #[error("Decompression error: {0}")]
    Decompression(String),

    /// Error serializing a document.
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Error decoding the document structure from the payload.
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Two documents differ.
    #[error("{0}")]
    Mismatch(String),
}

/// Broad classes of failure, one per error family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller passed a nonsensical argument.
    Argument,
    /// Input is not a supported container.
    Format,
    /// Container is corrupted or was tampered with.
    Integrity,
    /// Payload failed to decompress or deserialize (schema or version mismatch).
    Payload,
    /// Underlying I/O failure.
    Io,
    /// Export failure.
    Render,
    /// Comparison found differences.
    Mismatch,
}

impl Error {
    /// Get the class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::InvalidArgument(_) => ErrorKind::Argument,
            Error::TooSmall | Error::InvalidHeader => ErrorKind::Format,
            Error::InvalidChecksum => ErrorKind::Integrity,
            Error::Compression(_)
            | Error::Decompression(_)
            | Error::Serialize(_)
            | Error::Deserialize(_) => ErrorKind::Payload,
            Error::Render(_) => ErrorKind::Render,
            Error::Mismatch(_) => ErrorKind::Mismatch,
        }
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Self {
        Error::Deserialize(err.to_string())
    }
}
