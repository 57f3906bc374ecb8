/*! Source reading utilities

A [Source] is opened (and transparently decompressed), then streamed as a sequence of
records by a [RecordReader]. Each record is an owned [Element] tree.

!*/
mod element;
mod entities;
mod records;
mod source;

pub use element::{Descendants, Element};
pub use entities::parse_declarations;
pub use records::RecordReader;
pub use source::{Compression, Source, SourceStream};
