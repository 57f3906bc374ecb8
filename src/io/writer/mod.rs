/*!
# Corpus writing

Corpora are written in one shot once fully assembled, see [write_json].
!*/
mod json;

pub use json::write_json;
