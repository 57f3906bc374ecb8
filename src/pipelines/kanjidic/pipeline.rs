//! KANJIDIC2 conversion pipeline.
use std::path::PathBuf;

use log::{debug, info};

use crate::corpus::KanjiCorpus;
use crate::error::Error;
use crate::io::{write_json, Source};
use crate::pipelines::batch::for_each_extracted;
use crate::pipelines::{KanjiSummary, Options, Pipeline, Progress};

use super::KanjiExtractor;

const RECORD_TAG: &str = "character";

pub struct Kanjidic {
    src: Source,
    dst: PathBuf,
    options: Options,
}

impl Kanjidic {
    pub fn new(src: Source, dst: PathBuf, options: Options) -> Self {
        debug!("kanjidic options: {:?}", options);
        Self { src, dst, options }
    }

    /// Read and extract the whole source, without writing anything.
    ///
    /// The first malformed record, in document order, aborts the assembly.
    pub fn assemble(&self) -> Result<(KanjiCorpus, KanjiSummary), Error> {
        info!("reading {:?}", self.src.path());
        let records = self.src.records(RECORD_TAG)?;

        let extractor = KanjiExtractor::new(self.options.target_lang.clone());
        let mut corpus = KanjiCorpus::new();
        let mut summary = KanjiSummary::default();
        let progress = Progress::new("kanjidic", self.options.progress_every);

        for_each_extracted(
            records,
            self.options.batch_size,
            self.options.parallel,
            |idx, character| extractor.extract(idx, character),
            |_, extracted| {
                let entry = extracted?;
                match corpus.upsert(entry) {
                    Some(previous) => {
                        debug!("literal {} seen twice, keeping last values", previous.literal);
                        summary.record_replaced();
                    }
                    None => summary.record_inserted(),
                }
                progress.tick(summary.records);
                Ok(())
            },
        )?;

        progress.finish(&summary);
        Ok((corpus, summary))
    }
}

impl Pipeline<KanjiSummary> for Kanjidic {
    fn run(&self) -> Result<KanjiSummary, Error> {
        let (corpus, summary) = self.assemble()?;

        info!("writing {} characters to {:?}", corpus.len(), self.dst);
        write_json(&self.dst, &corpus)?;

        Ok(summary)
    }
}
