//! Normalized kanji entries.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiEntry {
    pub literal: String,
    pub meanings: Vec<String>,
    pub readings: Readings,
    pub grade: Option<u32>,
    #[serde(rename = "jlpt")]
    pub jlpt_level: Option<u32>,
    pub stroke_count: Option<u32>,
}

/// On (Sino-Japanese) and kun (native Japanese) readings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Readings {
    pub on: Vec<String>,
    pub kun: Vec<String>,
}

/// Reading types that are kept, keyed by their `r_type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingKind {
    On,
    Kun,
}

impl ReadingKind {
    pub fn from_attribute(r_type: Option<&str>) -> Option<Self> {
        match r_type {
            Some("ja_on") => Some(Self::On),
            Some("ja_kun") => Some(Self::Kun),
            _ => None,
        }
    }
}

impl Readings {
    pub fn push(&mut self, kind: ReadingKind, reading: String) {
        match kind {
            ReadingKind::On => self.on.push(reading),
            ReadingKind::Kun => self.kun.push(reading),
        }
    }
}
