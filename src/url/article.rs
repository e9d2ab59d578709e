/// Extracts the article name (trailing path segment) from a URL string
///
/// The name is everything after the last `/`. URLs with no `/` at all, or
/// whose last segment is empty (`https://host/wiki/`), have no article name.
///
/// # Examples
///
/// ```
/// use wikipath::url::article_name;
///
/// assert_eq!(article_name("https://en.wikipedia.org/wiki/Linux"), Some("Linux"));
/// assert_eq!(article_name("https://en.wikipedia.org/wiki/"), None);
/// assert_eq!(article_name("no-separator"), None);
/// ```
pub fn article_name(url: &str) -> Option<&str> {
    let (_, name) = url.rsplit_once('/')?;
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
