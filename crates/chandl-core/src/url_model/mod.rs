//! Archive entry naming.
//!
//! Derives a safe zip entry name from the final path segment of a resolved
//! image URL.

mod path;
mod sanitize;

pub use path::last_path_segment;
pub use sanitize::sanitize_entry_name;

/// Default entry name when the URL path yields nothing usable.
const DEFAULT_ENTRY_NAME: &str = "image.bin";

/// Derives the zip entry name for an image fetched from `url`.
///
/// Takes the last path segment of the URL and sanitizes it (no `/`, NUL, or
/// control chars; no leading/trailing dots or spaces; reserved names like
/// "." or ".." replaced).
///
/// `entry_name_for_url("https://chan.example.org/b/src/171234.jpg")` → `"171234.jpg"`
pub fn entry_name_for_url(url: &str) -> String {
    let raw = match last_path_segment(url) {
        Some(s) => s,
        None => return DEFAULT_ENTRY_NAME.to_string(),
    };

    let sanitized = sanitize_entry_name(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_ENTRY_NAME.to_string()
    } else {
        sanitized
    }
}
