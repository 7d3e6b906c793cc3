//! Writer for generated test files

use crate::error::{Result, TestgenError};
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use testgen_templates::GeneratedScript;
use tracing::{info, warn};

pub const FILE_PREFIX: &str = "generated_test";
pub const DEFAULT_EXTENSION: &str = "py";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// `generated_test_<number>_<YYYYMMDD_HHMMSS>.<ext>`
///
/// A leading dot on `ext` is ignored; an empty `ext` leaves the name bare.
pub fn output_file_name(number: u32, stamp: &NaiveDateTime, ext: &str) -> String {
    let base = format!("{}_{}_{}", FILE_PREFIX, number, stamp.format(TIMESTAMP_FORMAT));
    let ext = ext.trim().trim_start_matches('.');
    if ext.is_empty() {
        base
    } else {
        format!("{}.{}", base, ext)
    }
}

pub fn output_path(dir: &Path, number: u32, stamp: &NaiveDateTime, ext: &str) -> PathBuf {
    dir.join(output_file_name(number, stamp, ext))
}

/// Write a script stamped with the current local time.
pub fn write_script(dir: &Path, number: u32, script: &GeneratedScript, ext: &str) -> Result<PathBuf> {
    write_script_at(dir, number, script, ext, &Local::now().naive_local())
}

/// Write a script with an explicit timestamp.
///
/// An existing file of the same name is overwritten.
pub fn write_script_at(
    dir: &Path,
    number: u32,
    script: &GeneratedScript,
    ext: &str,
    stamp: &NaiveDateTime,
) -> Result<PathBuf> {
    let path = output_path(dir, number, stamp, ext);
    if path.try_exists()? {
        warn!(path = %path.display(), "overwriting existing file");
    }
    fs::write(&path, &script.text).map_err(|source| TestgenError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = script.text.len(), "script written");
    Ok(path)
}
