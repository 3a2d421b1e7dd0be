//! Filename extraction from a URL path.

use super::content_disposition::percent_decode;

/// Extracts the last non-empty path segment of `url` as a filename hint,
/// percent-decoded. Returns `None` for unparseable URLs, root paths, and
/// segments that decode to nothing usable.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    let decoded = percent_decode(segment).unwrap_or_else(|| segment.to_string());
    if decoded.is_empty() || decoded == "." || decoded == ".." {
        None
    } else {
        Some(decoded)
    }
}
