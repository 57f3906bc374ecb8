/*! Corpus assembly

Extracted entries are accumulated into the corpus-level container:
- a [WordCorpus] keeps words in source record order,
- a [KanjiCorpus] maps each literal to its entry, in order of first appearance.

Both are serialized as is by [crate::io::write_json].
!*/
mod ordered_map;

use serde::{Deserialize, Serialize};

use crate::pipelines::jmdict::WordEntry;
use crate::pipelines::kanjidic::KanjiEntry;

pub use ordered_map::OrderedMap;

/// Ordered list of words. Serialized as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordCorpus {
    entries: Vec<WordEntry>,
}

impl WordCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: WordEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Kanji keyed by literal. Serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KanjiCorpus {
    entries: OrderedMap<String, KanjiEntry>,
}

impl KanjiCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry keyed by its literal.
    ///
    /// A later entry with the same literal replaces the former one's values
    /// but keeps its position. The replaced entry is returned.
    pub fn upsert(&mut self, entry: KanjiEntry) -> Option<KanjiEntry> {
        self.entries.insert(entry.literal.clone(), entry)
    }

    pub fn get(&self, literal: &str) -> Option<&KanjiEntry> {
        self.entries.get(literal)
    }

    pub fn entries(&self) -> impl Iterator<Item = &KanjiEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
