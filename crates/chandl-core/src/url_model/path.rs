//! Final path segment extraction from a URL.

/// Extracts the last non-empty path segment from a URL.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn last_path_segment(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .last()?;
    Some(segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal() {
        assert_eq!(
            last_path_segment("https://chan.example.org/b/src/1.jpg").as_deref(),
            Some("1.jpg")
        );
        assert_eq!(
            last_path_segment("https://chan.example.org/single").as_deref(),
            Some("single")
        );
    }

    #[test]
    fn root_or_empty() {
        assert_eq!(last_path_segment("https://chan.example.org/"), None);
        assert_eq!(last_path_segment("https://chan.example.org"), None);
        assert_eq!(last_path_segment("not a url"), None);
    }

    #[test]
    fn trailing_slash_uses_previous_segment() {
        assert_eq!(
            last_path_segment("https://chan.example.org/b/src/").as_deref(),
            Some("src")
        );
    }
}
