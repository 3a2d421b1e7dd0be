//! Pick the filename-relevant header out of collected response header lines.

/// Returns the last `Content-Disposition` value seen, so that for a redirect
/// chain the final response wins.
pub(crate) fn content_disposition(lines: &[String]) -> Option<String> {
    let mut found = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-disposition") {
                found = Some(value.trim().to_string());
            }
        }
    }
    found
}
