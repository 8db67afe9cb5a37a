//! Fully-qualified short URL construction.

/// Joins the configured base URL and a short code with exactly one `/`.
pub fn build_short_url(base_url: &str, code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_short_url() {
        assert_eq!(
            build_short_url("http://localhost:5001", "abc123"),
            "http://localhost:5001/abc123"
        );
    }

    #[test]
    fn test_build_short_url_trims_trailing_slash() {
        assert_eq!(
            build_short_url("https://s.example.com/", "abc123"),
            "https://s.example.com/abc123"
        );
    }
}
