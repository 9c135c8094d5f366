//! Container format registry and detection.

use crate::error::Result;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Length, in bytes, of the magic header shared by every format.
pub const HEADER_LEN: usize = 10;

/// Known container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatId {
    /// Not a recognised container.
    Unknown,
    /// OCR recognition results.
    Eocr,
    /// Prepared document data.
    Edoc,
    /// Previous generation of OCR recognition results.
    KiraOcr,
    /// Previous generation of prepared document data.
    KiraDoc,
}

/// Format generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    /// Written by current encoders.
    Current,
    /// Read compatibility only.
    Legacy,
}

/// Metadata about a container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Format identifier
    pub id: FormatId,
    /// File extension without the leading dot
    pub extension: &'static str,
    /// Magic header, name padded with spaces and a trailing newline
    pub magic: &'static [u8; HEADER_LEN],
    /// Format generation
    pub generation: Generation,
    /// Direct legacy predecessor, readable by codecs for this format
    pub predecessor: Option<FormatId>,
}

/// Immutable table of known formats.
#[derive(Debug)]
pub struct FormatRegistry {
    formats: &'static [FormatInfo],
}

/// OCR recognition results, current generation.
pub const EOCR: FormatInfo = FormatInfo {
    id: FormatId::Eocr,
    extension: "eocr",
    magic: b"eocr     \n",
    generation: Generation::Current,
    predecessor: Some(FormatId::KiraOcr),
};

/// Prepared document data, current generation.
pub const EDOC: FormatInfo = FormatInfo {
    id: FormatId::Edoc,
    extension: "edoc",
    magic: b"edoc     \n",
    generation: Generation::Current,
    predecessor: Some(FormatId::KiraDoc),
};

/// OCR recognition results, legacy generation.
pub const KIRA_OCR: FormatInfo = FormatInfo {
    id: FormatId::KiraOcr,
    extension: "kiraocr",
    magic: b"kiraocr  \n",
    generation: Generation::Legacy,
    predecessor: None,
};

/// Prepared document data, legacy generation.
pub const KIRA_DOC: FormatInfo = FormatInfo {
    id: FormatId::KiraDoc,
    extension: "kiradoc",
    magic: b"kiradoc  \n",
    generation: Generation::Legacy,
    predecessor: None,
};

static FORMATS: [FormatInfo; 4] = [EOCR, EDOC, KIRA_OCR, KIRA_DOC];

static REGISTRY: FormatRegistry = FormatRegistry { formats: &FORMATS };

impl FormatRegistry {
    /// Get the built-in registry.
    pub fn standard() -> &'static FormatRegistry {
        &REGISTRY
    }

    /// Look up a format by id. `Unknown` has no entry.
    pub fn lookup(&self, id: FormatId) -> Option<&FormatInfo> {
        self.formats.iter().find(|info| info.id == id)
    }

    /// Identify a format by its leading bytes.
    ///
    /// Data shorter than [`HEADER_LEN`] is `Unknown`, not an error.
    pub fn sniff(&self, data: &[u8]) -> FormatId {
        let Some(header) = data.get(..HEADER_LEN) else {
            return FormatId::Unknown;
        };
        self.formats
            .iter()
            .find(|info| info.magic.as_slice() == header)
            .map_or(FormatId::Unknown, |info| info.id)
    }

    /// Iterate over all registered formats.
    pub fn iter(&self) -> impl Iterator<Item = &FormatInfo> {
        self.formats.iter()
    }
}

impl FormatId {
    /// Get the registry entry for this format.
    pub fn info(self) -> Option<&'static FormatInfo> {
        FormatRegistry::standard().lookup(self)
    }

    /// Get the file extension, empty for `Unknown`.
    pub fn extension(self) -> &'static str {
        self.info().map_or("", |info| info.extension)
    }

    /// Get the magic header.
    pub fn magic(self) -> Option<&'static [u8; HEADER_LEN]> {
        self.info().map(|info| info.magic)
    }

    /// Find a format by file extension (case insensitive, leading dot allowed).
    pub fn from_extension(ext: &str) -> FormatId {
        let ext = ext.trim_start_matches('.').to_lowercase();
        FormatRegistry::standard()
            .iter()
            .find(|info| info.extension == ext)
            .map_or(FormatId::Unknown, |info| info.id)
    }

    /// Check whether this is a legacy format.
    pub fn is_legacy(self) -> bool {
        self.info()
            .is_some_and(|info| info.generation == Generation::Legacy)
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatId::Unknown => write!(f, "unknown"),
            other => write!(f, "{}", other.extension()),
        }
    }
}

/// Detect the container format from bytes.
///
/// # Example
/// ```
/// use eocr::detect::{sniff, FormatId};
///
/// assert_eq!(sniff(b"kiraocr  \npayload"), FormatId::KiraOcr);
/// assert_eq!(sniff(b"eocr"), FormatId::Unknown);
/// ```
pub fn sniff(data: &[u8]) -> FormatId {
    FormatRegistry::standard().sniff(data)
}

/// Detect the container format of a file.
///
/// Reads at most [`HEADER_LEN`] bytes. A file too small to hold a header is
/// `Unknown`; failures opening or reading the file are errors.
pub fn sniff_path<P: AsRef<Path>>(path: P) -> Result<FormatId> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut header)?;
    Ok(sniff(&header))
}
