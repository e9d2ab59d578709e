//! HTML link extraction
//!
//! This module turns a fetched article into the list of article links the
//! search should consider:
//! - Only `<a href>` values starting with the article prefix
//! - Links containing an excluded namespace marker are dropped
//! - Relative hrefs are resolved against the site base
//! - Fragments are stripped so URLs can be used as dedup keys

use crate::config::LinkConfig;
use scraper::{Html, Selector};
use std::sync::Arc;
use url::Url;

/// Extracts outbound links from page content
pub trait LinkExtractor: Send + Sync + 'static {
    /// Returns absolute, fragment-free link targets found in `html`
    ///
    /// Malformed markup yields whatever links could be recovered, possibly none.
    fn extract_links(&self, page_url: &str, html: &str) -> Vec<String>;
}

impl<T: LinkExtractor> LinkExtractor for Arc<T> {
    fn extract_links(&self, page_url: &str, html: &str) -> Vec<String> {
        (**self).extract_links(page_url, html)
    }
}

/// Link extractor for MediaWiki article pages
#[derive(Debug, Clone)]
pub struct WikiLinkExtractor {
    site_base: Url,
    article_prefix: String,
    excluded_namespaces: Vec<String>,
}

impl WikiLinkExtractor {
    /// Builds an extractor from the link configuration
    ///
    /// # Example
    ///
    /// ```
    /// use wikipath::config::LinkConfig;
    /// use wikipath::search::{LinkExtractor, WikiLinkExtractor};
    ///
    /// let extractor = WikiLinkExtractor::new(&LinkConfig::default()).unwrap();
    /// let html = r#"<a href="/wiki/Linux#History">Linux</a><a href="/wiki/File:Tux.png">Tux</a>"#;
    /// let links = extractor.extract_links("https://en.wikipedia.org/wiki/Unix", html);
    /// assert_eq!(links, vec!["https://en.wikipedia.org/wiki/Linux"]);
    /// ```
    pub fn new(config: &LinkConfig) -> Result<Self, url::ParseError> {
        Ok(Self {
            site_base: Url::parse(&config.site_base)?,
            article_prefix: config.article_prefix.clone(),
            excluded_namespaces: config.excluded_namespaces.clone(),
        })
    }

    /// Returns whether an href points at a regular article
    pub fn is_article_link(&self, href: &str) -> bool {
        href.starts_with(&self.article_prefix)
            && !self
                .excluded_namespaces
                .iter()
                .any(|namespace| href.contains(namespace.as_str()))
    }

    fn resolve(&self, href: &str) -> Option<String> {
        let mut url = self.site_base.join(href).ok()?;
        url.set_fragment(None);
        Some(url.into())
    }
}

impl LinkExtractor for WikiLinkExtractor {
    fn extract_links(&self, page_url: &str, html: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse("a[href]") else {
            return Vec::new();
        };

        let document = Html::parse_document(html);
        let links: Vec<String> = document
            .select(&selector)
            .filter_map(|element| element.value().attr("href"))
            .map(str::trim)
            .filter(|href| self.is_article_link(href))
            .filter_map(|href| self.resolve(href))
            .collect();

        tracing::trace!("Extracted {} links from {}", links.len(), page_url);
        links
    }
}
