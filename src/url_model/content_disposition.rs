//! Content-Disposition filename extraction.

/// Extracts the filename from a raw Content-Disposition header value.
///
/// Understands `filename=token`, `filename="quoted"` (with backslash
/// escapes), and `filename*=UTF-8''percent-encoded` (RFC 5987). When both
/// forms are present, `filename*` wins.
pub fn filename_from_content_disposition(value: &str) -> Option<String> {
    let mut plain: Option<String> = None;

    for param in value.split(';').map(str::trim) {
        let Some((key, raw)) = param.split_once('=') else {
            continue;
        };
        let raw = raw.trim();

        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                if let Some(encoded) = raw
                    .get(..7)
                    .filter(|p| p.eq_ignore_ascii_case("UTF-8''"))
                    .map(|_| &raw[7..])
                {
                    if let Some(decoded) = percent_decode(encoded).filter(|s| !s.is_empty()) {
                        return Some(decoded);
                    }
                }
            }
            "filename" => {
                let unquoted = unquote(raw);
                if !unquoted.is_empty() {
                    plain = Some(unquoted);
                }
            }
            _ => {}
        }
    }

    plain
}

/// Strips surrounding double quotes and resolves backslash escapes.
fn unquote(v: &str) -> String {
    let inner = v
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(v);

    let mut out = String::with_capacity(inner.len());
    let mut escaped = false;
    for c in inner.chars() {
        if escaped {
            out.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else {
            out.push(c);
        }
    }
    if escaped {
        out.push('\\');
    }
    out
}

/// Decodes `%XX` escapes; malformed escapes pass through literally.
/// Returns `None` if the decoded bytes are not valid UTF-8.
pub(super) fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hi = (bytes[i + 1] as char).to_digit(16);
            let lo = (bytes[i + 2] as char).to_digit(16);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push((hi as u8) << 4 | lo as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_filename() {
        assert_eq!(
            filename_from_content_disposition("attachment; filename=\"report.pdf\"").as_deref(),
            Some("report.pdf")
        );
    }

    #[test]
    fn token_filename() {
        assert_eq!(
            filename_from_content_disposition("attachment; filename=simple.png").as_deref(),
            Some("simple.png")
        );
    }

    #[test]
    fn extended_form_wins() {
        assert_eq!(
            filename_from_content_disposition(
                "attachment; filename=\"fallback.bin\"; filename*=UTF-8''na%C3%AFve.jpg"
            )
            .as_deref(),
            Some("naïve.jpg")
        );
    }

    #[test]
    fn escaped_quotes_in_quoted_value() {
        assert_eq!(
            filename_from_content_disposition("attachment; filename=\"a\\\"b.gif\"").as_deref(),
            Some("a\"b.gif")
        );
    }

    #[test]
    fn no_filename_param() {
        assert_eq!(filename_from_content_disposition("inline"), None);
        assert_eq!(filename_from_content_disposition("attachment; size=42"), None);
    }

    #[test]
    fn percent_decode_basics() {
        assert_eq!(percent_decode("a%20b").as_deref(), Some("a b"));
        assert_eq!(percent_decode("no-escapes").as_deref(), Some("no-escapes"));
        // Truncated escape passes through.
        assert_eq!(percent_decode("x%2").as_deref(), Some("x%2"));
        // Invalid UTF-8 after decoding.
        assert_eq!(percent_decode("%ff%fe"), None);
    }
}
