//! Batched record extraction.
//!
//! Records are read sequentially into batches, each batch is extracted
//! (in parallel if asked to), then results are handed over in document order.
use rayon::prelude::*;

use crate::error::{Error, SourceReadError};
use crate::io::reader::Element;

/// Extract every record and feed `(index, extracted)` to `sink`, in document order.
///
/// Stops at the first source error or sink error.
pub fn for_each_extracted<I, T, X, S>(
    records: I,
    batch_size: usize,
    parallel: bool,
    extract: X,
    mut sink: S,
) -> Result<(), Error>
where
    I: Iterator<Item = Result<Element, SourceReadError>>,
    T: Send,
    X: Fn(usize, &Element) -> T + Sync,
    S: FnMut(usize, T) -> Result<(), Error>,
{
    let batch_size = batch_size.max(1);
    let mut records = records.enumerate();
    let mut batch: Vec<(usize, Element)> = Vec::with_capacity(batch_size);

    loop {
        batch.clear();
        for (idx, record) in records.by_ref().take(batch_size) {
            batch.push((idx, record?));
        }
        if batch.is_empty() {
            return Ok(());
        }

        // indexed collect keeps document order
        let extracted: Vec<(usize, T)> = if parallel {
            batch
                .par_iter()
                .map(|(idx, record)| (*idx, extract(*idx, record)))
                .collect()
        } else {
            batch
                .iter()
                .map(|(idx, record)| (*idx, extract(*idx, record)))
                .collect()
        };

        for (idx, item) in extracted {
            sink(idx, item)?;
        }
    }
}
