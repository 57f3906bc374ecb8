//! Source documents on local storage, optionally gzip-compressed.
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use flate2::bufread::MultiGzDecoder;
use log::debug;

use super::records::RecordReader;
use crate::error::SourceReadError;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Transport of the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Sniff the gzip magic bytes.
    #[default]
    Auto,
    Gzip,
    Plain,
}

impl FromStr for Compression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "gzip" | "gz" => Ok(Self::Gzip),
            "plain" | "none" => Ok(Self::Plain),
            other => Err(format!(
                "unknown compression {:?} (expected auto, gzip or plain)",
                other
            )),
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Auto => "auto",
            Self::Gzip => "gzip",
            Self::Plain => "plain",
        };
        f.write_str(s)
    }
}

pub type SourceStream = Box<dyn BufRead + Send>;

/// A source document location along with its transport.
#[derive(Debug, Clone)]
pub struct Source {
    path: PathBuf,
    compression: Compression,
}

impl Source {
    pub fn new(path: impl Into<PathBuf>, compression: Compression) -> Self {
        Self {
            path: path.into(),
            compression,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the document, decompressing it if needed.
    ///
    /// Decompression is lazy: a corrupt gzip stream is reported when the document is read.
    pub fn open(&self) -> Result<SourceStream, SourceReadError> {
        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        let mut reader = BufReader::new(file);

        let gzipped = match self.compression {
            Compression::Gzip => true,
            Compression::Plain => false,
            Compression::Auto => {
                let head = reader.fill_buf().map_err(|e| self.io_error(e))?;
                head.starts_with(&GZIP_MAGIC)
            }
        };
        debug!(
            "opening {:?} ({}, gzipped: {})",
            self.path, self.compression, gzipped
        );

        if gzipped {
            Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
        } else {
            Ok(Box::new(reader))
        }
    }

    /// Stream records named `record_tag`.
    pub fn records(
        &self,
        record_tag: &'static str,
    ) -> Result<RecordReader<SourceStream>, SourceReadError> {
        Ok(RecordReader::new(self.open()?, record_tag))
    }

    fn io_error(&self, source: std::io::Error) -> SourceReadError {
        SourceReadError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
