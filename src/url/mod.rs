//! URL handling module for Wikipath
//!
//! This module provides URL canonicalization, article-name extraction and
//! the hub-page blacklist used to keep the search from fanning out through
//! pages that link to everything.

mod article;
mod matcher;
mod normalize;

// Re-export main functions
pub use article::article_name;
pub use matcher::Blacklist;
pub use normalize::canonicalize_url;
