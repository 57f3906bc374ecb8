//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use jmconv::filtering::TargetLanguage;
use jmconv::io::{Compression, Source};
use jmconv::pipelines::{Options, DEFAULT_BATCH_SIZE};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "jmconv", about = "dictionary corpus normalization tool.")]
/// Holds every command that is callable by the `jmconv` command.
pub enum Jmconv {
    #[structopt(about = "Convert a JMdict word dictionary into a JSON array")]
    Jmdict(Convert),
    #[structopt(about = "Convert a KANJIDIC2 character dictionary into a JSON object")]
    Kanjidic(Convert),
}

#[derive(Debug, StructOpt)]
/// Conversion command and parameters.
///
/// ```sh
/// jmconv-jmdict 0.1.0
/// Convert a JMdict word dictionary into a JSON array
///
/// USAGE:
///     jmconv jmdict [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///     -h, --help        Prints help information
///     -p, --parallel    extract records of a batch in parallel
///     -V, --version     Prints version information
///
/// OPTIONS:
///     -b, --batch-size <batch-size>            number of records extracted at once [default: 4096]
///     -c, --compression <compression>          source compression: auto, gzip or plain [default: auto]
///     -l, --lang <lang>                        target language code (eng for jmdict, en for kanjidic)
///         --progress-every <progress-every>    log progress every n records
///
/// ARGS:
///     <src>    source XML document (may be gzipped)
///     <dst>    destination JSON file
/// ```
pub struct Convert {
    #[structopt(parse(from_os_str), help = "source XML document (may be gzipped)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination JSON file")]
    pub dst: PathBuf,
    #[structopt(
        short = "l",
        long = "lang",
        help = "target language code (eng for jmdict, en for kanjidic)"
    )]
    pub lang: Option<String>,
    #[structopt(
        short = "c",
        long = "compression",
        help = "source compression: auto, gzip or plain",
        default_value = "auto"
    )]
    pub compression: Compression,
    #[structopt(long = "progress-every", help = "log progress every n records")]
    pub progress_every: Option<usize>,
    #[structopt(
        short = "b",
        long = "batch-size",
        help = "number of records extracted at once",
        default_value = "4096"
    )]
    pub batch_size: usize,
    #[structopt(
        short = "p",
        long = "parallel",
        help = "extract records of a batch in parallel"
    )]
    pub parallel: bool,
}

impl Convert {
    pub fn source(&self) -> Source {
        Source::new(&self.src, self.compression)
    }

    /// Override corpus defaults with provided arguments.
    pub fn options(&self, defaults: Options) -> Options {
        Options {
            target_lang: self
                .lang
                .as_ref()
                .map(TargetLanguage::new)
                .unwrap_or(defaults.target_lang),
            progress_every: self.progress_every.unwrap_or(defaults.progress_every),
            batch_size: self.batch_size,
            parallel: self.parallel,
        }
    }
}
