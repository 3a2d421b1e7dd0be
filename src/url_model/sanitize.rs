//! Filesystem-safe filename sanitization.

/// Sanitizes a candidate filename.
///
/// Keeps alphanumerics (any script) plus `-`, `_` and `.`; every run of other
/// characters (spaces, path separators, control characters, shell
/// metacharacters) collapses to a single `_`. Leading/trailing dots and
/// underscores are trimmed and the result is capped at 255 bytes (NAME_MAX).
pub fn sanitize_filename(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let mut out = String::with_capacity(name.len());
    let mut gap = false;

    for c in name.chars() {
        if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
            if gap && !out.is_empty() {
                out.push('_');
            }
            gap = false;
            out.push(c);
        } else {
            gap = true;
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
