/*! JMdict word dictionary conversion.

Every `<entry>` becomes a [WordEntry], unless it has no reading or no gloss in the target language.
The corpus is a JSON array of words in source order.
!*/
mod extract;
mod pipeline;
mod types;

pub use extract::{DropReason, Extraction, WordExtractor};
pub use pipeline::Jmdict;
pub use types::{Example, WordEntry};
