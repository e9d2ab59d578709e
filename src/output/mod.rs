//! Output module for search results
//!
//! This module handles:
//! - The final result of a search (path found or not)
//! - Rendering that result the way the command-line tool prints it
//! - Recording search statistics

pub mod stats;

pub use stats::{print_statistics, SearchStats, StatsSnapshot};

use std::io::{self, Write};
use std::time::Duration;

/// Final result of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Target reached; path runs start to target inclusive
    Found { path: Vec<String> },

    /// Frontier exhausted (or depth limit reached) without meeting the target
    NotFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The discovered path, if any
    pub fn path(&self) -> Option<&[String]> {
        match self {
            Self::Found { path } => Some(path),
            Self::NotFound => None,
        }
    }
}

/// Everything a finished search reports back to its caller
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Canonical start URL
    pub start: String,

    /// Canonical target URL
    pub target: String,

    pub outcome: SearchOutcome,

    pub stats: StatsSnapshot,

    /// Wall-clock time spent inside the search
    pub elapsed: Duration,
}

/// Writes the path (one URL per line) or the not-found message
///
/// # Example
///
/// ```
/// use wikipath::output::{write_outcome, SearchOutcome};
///
/// let outcome = SearchOutcome::Found {
///     path: vec!["https://a.test/wiki/A".to_string(), "https://a.test/wiki/B".to_string()],
/// };
/// let mut out = Vec::new();
/// write_outcome(&mut out, &outcome, "https://a.test/wiki/A", "https://a.test/wiki/B").unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "https://a.test/wiki/A\nhttps://a.test/wiki/B\n"
/// );
/// ```
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &SearchOutcome,
    start: &str,
    target: &str,
) -> io::Result<()> {
    match outcome {
        SearchOutcome::Found { path } => {
            for url in path {
                writeln!(out, "{}", url)?;
            }
        }
        SearchOutcome::NotFound => {
            writeln!(out, "No path found from {} to {}.", start, target)?;
        }
    }
    Ok(())
}
