//! The fetch-and-save pipeline: GET, validate, derive a name, write to disk.

use crate::error::FetchError;
use crate::{fetch, storage, url_model};
use std::path::{Path, PathBuf};

/// Default directory fetched files are saved under, relative to the working
/// directory.
pub const FETCH_DIR: &str = "Fetched_Images";

/// Outcome of a successful fetch: what was written and where.
#[derive(Debug)]
pub struct FetchResult {
    /// Final filename on disk (may carry a collision counter suffix).
    pub filename: String,
    /// Full destination path, `dir` joined with `filename`.
    pub path: PathBuf,
    /// The response body, exactly as written to disk.
    pub body: Vec<u8>,
}

/// Fetches `url` and saves the response body under `dir`.
///
/// Runs the whole pipeline: one HTTP GET, status validation, filename
/// derivation (with a fallback name for pathless URLs), idempotent directory
/// creation, collision-free path selection, and an atomic write. No file is
/// created when the fetch fails.
pub fn fetch_and_save(url: &str, dir: &Path) -> Result<FetchResult, FetchError> {
    let response = fetch::get(url)?;

    let name = url_model::derive_filename(url, response.content_disposition.as_deref());

    storage::ensure_dir(dir)?;
    let path = storage::unique_path(dir, &name);
    storage::save_bytes(&path, &response.body)?;

    let filename = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or(name);

    tracing::info!(
        "saved {} ({} bytes, HTTP {})",
        path.display(),
        response.body.len(),
        response.status
    );

    Ok(FetchResult {
        filename,
        path,
        body: response.body,
    })
}
