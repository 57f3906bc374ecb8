//! Progress logging and run summaries.
//!
//! Purely advisory: nothing here has an effect on the produced corpus.
use std::fmt;

use log::info;

use super::jmdict::DropReason;

/// Counters of a finished word dictionary conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSummary {
    /// Records read from the source.
    pub records: usize,
    /// Entries in the written corpus.
    pub entries: usize,
    pub dropped_no_reading: usize,
    pub dropped_no_meaning: usize,
}

impl WordSummary {
    pub fn dropped(&self) -> usize {
        self.dropped_no_reading + self.dropped_no_meaning
    }

    pub(crate) fn record_kept(&mut self) {
        self.records += 1;
        self.entries += 1;
    }

    pub(crate) fn record_dropped(&mut self, reason: DropReason) {
        self.records += 1;
        match reason {
            DropReason::NoReading => self.dropped_no_reading += 1,
            DropReason::NoMeaning => self.dropped_no_meaning += 1,
        }
    }
}

impl fmt::Display for WordSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, {} entries, {} dropped (no reading: {}, no meaning: {})",
            self.records,
            self.entries,
            self.dropped(),
            self.dropped_no_reading,
            self.dropped_no_meaning,
        )
    }
}

/// Counters of a finished kanji dictionary conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KanjiSummary {
    /// Records read from the source.
    pub records: usize,
    /// Characters in the written corpus.
    pub entries: usize,
    /// Records whose literal was already present.
    pub replaced: usize,
}

impl KanjiSummary {
    pub(crate) fn record_inserted(&mut self) {
        self.records += 1;
        self.entries += 1;
    }

    pub(crate) fn record_replaced(&mut self) {
        self.records += 1;
        self.replaced += 1;
    }
}

impl fmt::Display for KanjiSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, {} characters, {} replaced by a later record",
            self.records, self.entries, self.replaced
        )
    }
}

/// Logs every `every` records (never if `every` is 0).
pub struct Progress {
    label: &'static str,
    every: usize,
}

impl Progress {
    pub fn new(label: &'static str, every: usize) -> Self {
        Self { label, every }
    }

    /// Log if `records` is a multiple of the interval.
    pub fn tick(&self, records: usize) {
        if self.every > 0 && records % self.every == 0 {
            info!("[{}] processed {} records", self.label, records);
        }
    }

    pub fn finish<S: fmt::Display>(&self, summary: &S) {
        info!("[{}] done: {}", self.label, summary);
    }
}
