//! Conversion options.
use crate::filtering::TargetLanguage;

pub const DEFAULT_BATCH_SIZE: usize = 4096;

/// Options shared by both pipelines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Language of the kept glosses/meanings.
    pub target_lang: TargetLanguage,
    /// Log progress every `progress_every` records. 0 disables progress logging.
    pub progress_every: usize,
    /// Number of records extracted at once.
    pub batch_size: usize,
    /// Extract the records of a batch in parallel.
    pub parallel: bool,
}

impl Options {
    /// JMdict defaults: English glosses (`eng`).
    pub fn words() -> Self {
        Self {
            target_lang: TargetLanguage::new("eng"),
            progress_every: 1000,
            batch_size: DEFAULT_BATCH_SIZE,
            parallel: false,
        }
    }

    /// KANJIDIC2 defaults: English meanings (`en`).
    pub fn kanji() -> Self {
        Self {
            target_lang: TargetLanguage::new("en"),
            progress_every: 100,
            batch_size: DEFAULT_BATCH_SIZE,
            parallel: false,
        }
    }
}
