//! # jmconv
//!
//! Normalization of the JMdict (words) and KANJIDIC2 (characters) XML dumps
//! into compact JSON corpora.
//!
//! Each corpus goes through the same steps:
//! the [io::Source] is opened and streamed record by record,
//! each record is extracted into an entry (or dropped),
//! entries are assembled into a [corpus] container that is finally written as JSON.
//!
//! ```no_run
//! use jmconv::io::{Compression, Source};
//! use jmconv::pipelines::{Jmdict, Options, Pipeline};
//!
//! let src = Source::new("JMdict_e.gz", Compression::Auto);
//! let summary = Jmdict::new(src, "assets/jmdict.json".into(), Options::words()).run()?;
//! println!("{}", summary);
//! # Ok::<(), jmconv::error::Error>(())
//! ```
pub mod corpus;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
