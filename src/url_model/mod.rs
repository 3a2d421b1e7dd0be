//! Filename derivation for fetched resources.
//!
//! Picks a local filename from the Content-Disposition header or the URL's
//! last path segment, sanitized for the local filesystem, with a fixed
//! fallback when neither yields anything usable.

mod content_disposition;
mod path;
mod sanitize;

pub use content_disposition::filename_from_content_disposition;
pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename;

/// Fallback filename when neither the URL path nor Content-Disposition
/// produces a usable name (e.g. the URL ends in `/`).
pub const DEFAULT_FILENAME: &str = "image.bin";

/// Derives a non-empty, filesystem-safe filename for saving a fetch.
///
/// Preference order: Content-Disposition filename, then the URL's last path
/// segment (percent-decoded), then [`DEFAULT_FILENAME`].
pub fn derive_filename(url: &str, content_disposition: Option<&str>) -> String {
    let candidate = content_disposition
        .and_then(filename_from_content_disposition)
        .or_else(|| filename_from_url_path(url));

    match candidate.as_deref().map(sanitize_filename) {
        Some(name) if !name.is_empty() && name != "." && name != ".." => name,
        _ => DEFAULT_FILENAME.to_string(),
    }
}
