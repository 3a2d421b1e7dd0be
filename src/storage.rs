//! Disk I/O for fetched files.
//!
//! Directory creation is idempotent; bodies land in a `.part` temp file that
//! is renamed into place once fully written, so an interrupted write never
//! shows up under the final name.

use crate::error::FetchError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Suffix used for the in-flight temp file before the final rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Creates `dir` (and missing parents). A no-op when it already exists.
pub fn ensure_dir(dir: &Path) -> Result<(), FetchError> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Returns `dir/filename`, or `dir/stem_N.ext` for the first `N >= 1` that is
/// free when `dir/filename` is already taken.
pub fn unique_path(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let stem = candidate
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = candidate
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut n = 1u32;
    loop {
        let next = dir.join(format!("{}_{}{}", stem, n, ext));
        if !next.exists() {
            return next;
        }
        n += 1;
    }
}

/// Writes `bytes` to `path` via a `.part` temp file and an atomic rename.
/// On any failure the temp file is removed; `path` itself is never left
/// half-written.
pub fn save_bytes(path: &Path, bytes: &[u8]) -> Result<(), FetchError> {
    let tmp = temp_path(path);

    let result = (|| -> std::io::Result<()> {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result.map_err(FetchError::Filesystem)
}

/// Temp file path: appends `.part` to the final path.
fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}
