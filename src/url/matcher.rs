use super::article::article_name;
use std::collections::HashSet;

/// Set of hub pages that are never expanded
///
/// Generic pages such as `Main_Page` or large countries link to a huge part
/// of the wiki; following them makes the frontier explode without bringing
/// the search closer to its target. Membership is decided on the article
/// name, compared case-sensitively.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    pages: HashSet<String>,
}

impl Blacklist {
    /// Builds a blacklist from a list of article names
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the URL points at a blacklisted article
    ///
    /// # Examples
    ///
    /// ```
    /// use wikipath::url::Blacklist;
    ///
    /// let blacklist = Blacklist::new(["Main_Page"]);
    /// assert!(blacklist.contains("https://en.wikipedia.org/wiki/Main_Page"));
    /// assert!(!blacklist.contains("https://en.wikipedia.org/wiki/Linux"));
    /// ```
    pub fn contains(&self, url: &str) -> bool {
        article_name(url).is_some_and(|name| self.pages.contains(name))
    }

    /// Number of blacklisted articles
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns whether the blacklist is empty
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
