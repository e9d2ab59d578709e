use crate::UrlError;
use url::Url;

/// Canonicalizes a URL into the flat string key used for deduplication
///
/// # Canonicalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Only accept `http` and `https` schemes
/// 3. Require a host
/// 4. Remove fragment (everything after #)
///
/// The result uses the same serialization as links produced by the link
/// extractor (lowercased host, percent-encoded path), so a discovered link
/// and the target compare equal exactly when they name the same page.
///
/// # Examples
///
/// ```
/// use wikipath::url::canonicalize_url;
///
/// let url = canonicalize_url("https://EN.wikipedia.org/wiki/Linux#History").unwrap();
/// assert_eq!(url, "https://en.wikipedia.org/wiki/Linux");
/// ```
pub fn canonicalize_url(url_str: &str) -> Result<String, UrlError> {
    let mut url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);

    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_fragment() {
        let result = canonicalize_url("https://en.wikipedia.org/wiki/Linux#Design").unwrap();
        assert_eq!(result, "https://en.wikipedia.org/wiki/Linux");
    }

    #[test]
    fn test_lowercase_host_keeps_path_case() {
        let result = canonicalize_url("https://EN.WIKIPEDIA.ORG/wiki/Linux").unwrap();
        assert_eq!(result, "https://en.wikipedia.org/wiki/Linux");
    }

    #[test]
    fn test_http_is_accepted() {
        let result = canonicalize_url("http://127.0.0.1:8080/wiki/Page").unwrap();
        assert_eq!(result, "http://127.0.0.1:8080/wiki/Page");
    }

    #[test]
    fn test_reject_other_scheme() {
        let result = canonicalize_url("ftp://example.com/wiki/Page");
        assert!(matches!(result, Err(UrlError::InvalidScheme(_))));
    }

    #[test]
    fn test_reject_malformed() {
        let result = canonicalize_url("not a url");
        assert!(matches!(result, Err(UrlError::Parse(_))));
    }

    #[test]
    fn test_non_ascii_is_percent_encoded() {
        let result = canonicalize_url("https://en.wikipedia.org/wiki/Café").unwrap();
        assert_eq!(result, "https://en.wikipedia.org/wiki/Caf%C3%A9");
    }
}
