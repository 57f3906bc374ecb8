/*! KANJIDIC2 character dictionary conversion.

Every `<character>` becomes a [KanjiEntry]. The corpus is a JSON object keyed by literal.
A record without literal, or with a non-numeric grade/JLPT level/stroke count, aborts the conversion.
!*/
mod extract;
mod pipeline;
mod types;

pub use extract::KanjiExtractor;
pub use pipeline::Kanjidic;
pub use types::{KanjiEntry, ReadingKind, Readings};
