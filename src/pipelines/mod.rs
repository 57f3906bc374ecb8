//! Pipelines.
//!
//! Each corpus has its own pipeline, going from source document to written corpus:
//! read records, extract entries, assemble the corpus, write it.
//! Both implement the light [pipeline::Pipeline] trait.
mod batch;
pub mod jmdict;
pub mod kanjidic;
mod options;
#[allow(clippy::module_inception)]
pub mod pipeline;
mod progress;

pub use jmdict::Jmdict;
pub use kanjidic::Kanjidic;
pub use options::{Options, DEFAULT_BATCH_SIZE};
pub use pipeline::Pipeline;
pub use progress::{KanjiSummary, Progress, WordSummary};
