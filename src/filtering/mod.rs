/*! Filtering utilities

Filters implement [filter::Filter], a pure predicate over an item.

Language filtering is done in two steps:
the language marker of a gloss/meaning is first classified into a [Language],
which is then checked against the configured [TargetLanguage].
! */
mod filter;
mod lang;

pub use filter::Filter;
pub use lang::{Language, TargetLanguage};
