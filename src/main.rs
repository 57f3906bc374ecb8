//! # jmconv
//!
//! Converts the JMdict and KANJIDIC2 dictionaries into JSON.
//!
//! ```sh
//! jmconv 0.1.0
//! dictionary corpus normalization tool.
//!
//! USAGE:
//!     jmconv <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help        Prints this message or the help of the given subcommand(s)
//!     jmdict      Convert a JMdict word dictionary into a JSON array
//!     kanjidic    Convert a KANJIDIC2 character dictionary into a JSON object
//! ```
//!
//! Logging is configured through `RUST_LOG` (`RUST_LOG=info jmconv …` shows progress).
use jmconv::error::Error;
use jmconv::pipelines::{Jmdict, Kanjidic, Options, Pipeline};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Jmconv::from_args();
    debug!("cli args\n{:#?}", opt);

    let summary = match opt {
        cli::Jmconv::Jmdict(c) => {
            Jmdict::new(c.source(), c.dst.clone(), c.options(Options::words()))
                .run()
                .map(|s| s.to_string())
        }
        cli::Jmconv::Kanjidic(c) => {
            Kanjidic::new(c.source(), c.dst.clone(), c.options(Options::kanji()))
                .run()
                .map(|s| s.to_string())
        }
    };

    match summary {
        Ok(summary) => {
            info!("conversion complete: {}", summary);
            Ok(())
        }
        Err(e) => {
            error!("conversion failed: {}", e);
            Err(e)
        }
    }
}
