//! Structural validation of URLs submitted for shortening.

use url::Url;

/// Returns true if `input` parses as a URL with a non-empty scheme and a
/// non-empty host.
///
/// The URL is only inspected, never rewritten: callers store the original
/// string exactly as submitted. Malformed input yields `false`.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://example.com/page"));
/// assert!(is_valid_url("ftp://files.example.com"));
/// assert!(!is_valid_url("not a url"));
/// assert!(!is_valid_url("mailto:someone@example.com"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_and_https_are_valid() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com/page?q=1#top"));
        assert!(is_valid_url("https://sub.example.com:8443/path"));
    }

    #[test]
    fn test_other_schemes_with_host_are_valid() {
        assert!(is_valid_url("ftp://files.example.com/readme.txt"));
    }

    #[test]
    fn test_ip_hosts_are_valid() {
        assert!(is_valid_url("http://127.0.0.1:5001/x"));
        assert!(is_valid_url("http://[::1]/"));
    }

    #[test]
    fn test_plain_text_is_invalid() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("example.com"));
    }

    #[test]
    fn test_missing_host_is_invalid() {
        assert!(!is_valid_url("http://"));
        assert!(!is_valid_url("mailto:someone@example.com"));
        assert!(!is_valid_url("file:///etc/passwd"));
    }
}
