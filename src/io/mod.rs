/*!
# IO utilities

Source document loading and corpus saving.
!*/
pub mod reader;
pub mod writer;

pub use reader::{Compression, Source};
pub use writer::write_json;
