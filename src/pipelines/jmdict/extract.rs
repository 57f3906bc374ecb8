//! Word record extraction.
//!
//! A JMdict `<entry>` is made of written forms (`k_ele`), reading forms (`r_ele`)
//! and senses (`sense`) carrying glosses, parts of speech and examples.
use itertools::Itertools;

use crate::filtering::{Filter, Language, TargetLanguage};
use crate::io::reader::Element;

use super::types::{Example, WordEntry};

const XML_LANG: &str = "xml:lang";

/// Why a word record is left out of the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    NoReading,
    NoMeaning,
}

/// Result of a word record extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Kept(WordEntry),
    Dropped(DropReason),
}

impl Extraction {
    pub fn entry(self) -> Option<WordEntry> {
        match self {
            Self::Kept(entry) => Some(entry),
            Self::Dropped(_) => None,
        }
    }
}

/// Turns `<entry>` records into [WordEntry].
#[derive(Debug, Clone, Default)]
pub struct WordExtractor {
    target: TargetLanguage,
}

impl WordExtractor {
    pub fn new(target: TargetLanguage) -> Self {
        Self { target }
    }

    pub fn extract(&self, entry: &Element) -> Extraction {
        let kanji = entry
            .find("k_ele")
            .and_then(|k_ele| k_ele.child("keb"))
            .and_then(Element::text)
            .map(str::to_string);

        let r_ele = match entry.find("r_ele") {
            Some(r_ele) => r_ele,
            None => return Extraction::Dropped(DropReason::NoReading),
        };
        let reading = r_ele
            .child("reb")
            .and_then(Element::text)
            .map(str::to_string);

        let mut meanings = Vec::new();
        let mut parts_of_speech = Vec::new();
        let mut examples = Vec::new();

        for sense in entry.find_all("sense") {
            examples.extend(sense.find_all("example").filter_map(|ex| self.example(ex)));

            parts_of_speech.extend(
                sense
                    .find_all("pos")
                    .filter_map(Element::text)
                    .map(str::to_string),
            );

            meanings.extend(
                sense
                    .find_all("gloss")
                    .filter(|gloss| self.is_target(gloss))
                    .filter_map(Element::text)
                    .map(str::to_string),
            );
        }

        let reading = match reading {
            Some(reading) => reading,
            None => return Extraction::Dropped(DropReason::NoReading),
        };
        if meanings.is_empty() {
            return Extraction::Dropped(DropReason::NoMeaning);
        }

        Extraction::Kept(WordEntry {
            kanji,
            reading,
            meanings,
            parts_of_speech: parts_of_speech.into_iter().unique().collect(),
            examples: if examples.is_empty() {
                None
            } else {
                Some(examples)
            },
        })
    }

    /// Both sides are required, otherwise the example is skipped.
    fn example(&self, example: &Element) -> Option<Example> {
        let source = example.find("ex_text").and_then(Element::text)?;
        let target = example
            .find_all("ex_sent")
            .find(|sent| self.is_target(sent))
            .and_then(Element::text)?;

        Some(Example {
            source: source.to_string(),
            target: target.to_string(),
        })
    }

    fn is_target(&self, element: &Element) -> bool {
        self.target
            .detect(Language::classify(element.attribute(XML_LANG)))
    }
}
