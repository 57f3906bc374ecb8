//! JMdict conversion pipeline.
use std::path::PathBuf;

use log::{debug, info};

use crate::corpus::WordCorpus;
use crate::error::Error;
use crate::io::{write_json, Source};
use crate::pipelines::batch::for_each_extracted;
use crate::pipelines::{Options, Pipeline, Progress, WordSummary};

use super::{Extraction, WordExtractor};

const RECORD_TAG: &str = "entry";

pub struct Jmdict {
    src: Source,
    dst: PathBuf,
    options: Options,
}

impl Jmdict {
    pub fn new(src: Source, dst: PathBuf, options: Options) -> Self {
        debug!("jmdict options: {:?}", options);
        Self { src, dst, options }
    }

    /// Read and extract the whole source, without writing anything.
    pub fn assemble(&self) -> Result<(WordCorpus, WordSummary), Error> {
        info!("reading {:?}", self.src.path());
        let records = self.src.records(RECORD_TAG)?;

        let extractor = WordExtractor::new(self.options.target_lang.clone());
        let mut corpus = WordCorpus::new();
        let mut summary = WordSummary::default();
        let progress = Progress::new("jmdict", self.options.progress_every);

        for_each_extracted(
            records,
            self.options.batch_size,
            self.options.parallel,
            |_, entry| extractor.extract(entry),
            |idx, extraction| {
                match extraction {
                    Extraction::Kept(entry) => {
                        corpus.push(entry);
                        summary.record_kept();
                    }
                    Extraction::Dropped(reason) => {
                        debug!("entry #{} dropped: {:?}", idx, reason);
                        summary.record_dropped(reason);
                    }
                }
                progress.tick(summary.records);
                Ok(())
            },
        )?;

        progress.finish(&summary);
        Ok((corpus, summary))
    }
}

impl Pipeline<WordSummary> for Jmdict {
    fn run(&self) -> Result<WordSummary, Error> {
        let (corpus, summary) = self.assemble()?;

        info!("writing {} entries to {:?}", corpus.len(), self.dst);
        write_json(&self.dst, &corpus)?;

        Ok(summary)
    }
}
