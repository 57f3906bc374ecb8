//! Error enum
//!
//! Fatal errors abort the conversion of a whole corpus.
//! Dropped word records are not errors and never show up here.
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    SourceRead(SourceReadError),
    MalformedRecord(MalformedRecordError),
    SinkWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    Serde(serde_json::Error),
}

/// Failure to open, decompress or parse the source document.
#[derive(Debug)]
pub enum SourceReadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Not well-formed markup, or a stream error surfaced while parsing
    /// (a corrupt gzip member ends up here).
    Xml {
        position: usize,
        source: quick_xml::Error,
    },
    /// The document ended before all of its elements were closed,
    /// after `records` complete records.
    Truncated { records: usize },
    /// The document has no root element.
    NoRoot,
    /// Text before the root element, or anything but whitespace and comments after it.
    OutsideRoot { position: usize },
}

/// Why a record could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    MissingField(&'static str),
    NotNumeric { field: &'static str, value: String },
}

/// A record that does not match the expected schema.
///
/// `index` is the zero-based position of the record in the document,
/// `key` its identifying field when it could be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecordError {
    pub index: usize,
    pub key: Option<String>,
    pub reason: MalformedReason,
}

impl MalformedRecordError {
    pub fn new(index: usize, key: Option<String>, reason: MalformedReason) -> Self {
        Self { index, key, reason }
    }
}

impl From<SourceReadError> for Error {
    fn from(e: SourceReadError) -> Error {
        Error::SourceRead(e)
    }
}

impl From<MalformedRecordError> for Error {
    fn from(e: MalformedRecordError) -> Error {
        Error::MalformedRecord(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SourceRead(e) => write!(f, "could not read source: {}", e),
            Error::MalformedRecord(e) => write!(f, "{}", e),
            Error::SinkWrite { path, source } => {
                write!(f, "could not write {:?}: {}", path, source)
            }
            Error::Serde(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl fmt::Display for SourceReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceReadError::Io { path, source } => write!(f, "{:?}: {}", path, source),
            SourceReadError::Xml { position, source } => {
                write!(f, "malformed markup at byte {}: {}", position, source)
            }
            SourceReadError::Truncated { records } => {
                write!(f, "document ends unexpectedly after {} records", records)
            }
            SourceReadError::NoRoot => write!(f, "document has no root element"),
            SourceReadError::OutsideRoot { position } => {
                write!(f, "content outside of the root element at byte {}", position)
            }
        }
    }
}

impl fmt::Display for MalformedRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed record #{}", self.index)?;
        if let Some(key) = &self.key {
            write!(f, " ({})", key)?;
        }
        match &self.reason {
            MalformedReason::MissingField(field) => write!(f, ": missing <{}>", field),
            MalformedReason::NotNumeric { field, value } => {
                write!(f, ": <{}> is not a number: {:?}", field, value)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SourceRead(e) => Some(e),
            Error::MalformedRecord(e) => Some(e),
            Error::SinkWrite { source, .. } => Some(source),
            Error::Serde(e) => Some(e),
        }
    }
}

impl std::error::Error for SourceReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceReadError::Io { source, .. } => Some(source),
            SourceReadError::Xml { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl std::error::Error for MalformedRecordError {}
