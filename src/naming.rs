//! Timestamped output filenames.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

/// `strftime` pattern for the filename timestamp, e.g. `20241031_184502`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Build `<base>_<YYYYMMDD_HHMMSS>.<extension>` from the current local time.
///
/// The timestamp has one-second resolution: two calls within the same second
/// return the same name.
#[must_use]
pub fn unique_filename(base: &str, extension: &str) -> String {
    filename_at(base, extension, Local::now().naive_local())
}

/// Build `<base>_<YYYYMMDD_HHMMSS>.<extension>` for a given timestamp.
#[must_use]
pub fn filename_at(base: &str, extension: &str, timestamp: NaiveDateTime) -> String {
    format!("{base}_{}.{extension}", timestamp.format(TIMESTAMP_FORMAT))
}

/// Join `dir` with a fresh [`unique_filename`].
#[must_use]
pub fn output_path<P: AsRef<Path>>(dir: P, base: &str, extension: &str) -> PathBuf {
    dir.as_ref().join(unique_filename(base, extension))
}
