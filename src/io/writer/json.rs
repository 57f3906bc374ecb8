//! Whole-document JSON writer.
//!
//! The document is written into a sibling `<file name>.partial` file, which is renamed over
//! the destination once everything has been flushed.
//! On failure, the partial file is removed and the destination is left untouched.
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;

use crate::error::Error;

/// Serialize `value` as pretty-printed JSON into `dst`, creating parent directories if needed.
///
/// Non-ASCII text is written as is.
pub fn write_json<T: Serialize + ?Sized>(dst: &Path, value: &T) -> Result<(), Error> {
    if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| sink_error(parent, e))?;
    }

    let partial = partial_path(dst);
    debug!("writing into {:?}", partial);

    match write_partial(&partial, value).and_then(|_| {
        fs::rename(&partial, dst).map_err(|e| sink_error(dst, e))
    }) {
        Ok(()) => Ok(()),
        Err(e) => {
            if partial.exists() {
                if let Err(rm) = fs::remove_file(&partial) {
                    warn!("could not remove {:?}: {}", partial, rm);
                }
            }
            Err(e)
        }
    }
}

fn write_partial<T: Serialize + ?Sized>(partial: &Path, value: &T) -> Result<(), Error> {
    let file = File::create(partial).map_err(|e| sink_error(partial, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| {
        if e.is_io() {
            sink_error(partial, e.into())
        } else {
            Error::Serde(e)
        }
    })?;
    writer.write_all(b"\n").map_err(|e| sink_error(partial, e))?;
    writer.flush().map_err(|e| sink_error(partial, e))?;
    Ok(())
}

/// `dir/kanji.json` -> `dir/kanji.json.partial`
fn partial_path(dst: &Path) -> PathBuf {
    let mut name = dst
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("corpus"));
    name.push(".partial");
    dst.with_file_name(name)
}

fn sink_error(path: &Path, source: std::io::Error) -> Error {
    Error::SinkWrite {
        path: path.to_path_buf(),
        source,
    }
}
