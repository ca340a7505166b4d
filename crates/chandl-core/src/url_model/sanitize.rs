//! Zip entry name sanitization.

/// Sanitizes a candidate entry name so extracting the archive is safe on
/// Linux filesystems.
///
/// - Replaces NUL, `/`, `\`, whitespace, and control characters with `_`
/// - Collapses consecutive underscores
/// - Trims leading/trailing dots, spaces, and underscores
/// - Limits length to 255 bytes (NAME_MAX)
pub fn sanitize_entry_name(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let mapped = match c {
            '\0' | '/' | '\\' => '_',
            c if c.is_control() || c == ' ' || c == '\t' => '_',
            c => c,
        };
        if mapped == '_' && out.ends_with('_') {
            continue;
        }
        out.push(mapped);
    }

    let trimmed = out.trim_matches(|c| matches!(c, ' ' | '.' | '_'));

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
