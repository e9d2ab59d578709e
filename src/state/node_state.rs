/// Outcome definitions for nodes and links handled by search workers
use std::fmt;

/// What a worker did with a node it dequeued from the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeOutcome {
    /// Page was fetched and its links were processed
    Expanded,

    /// Node sits at the maximum depth and was dropped without a fetch
    DepthLimited,

    /// Fetch failed (network error, bad status, non-HTML content); node skipped
    FetchFailed,
}

impl NodeOutcome {
    /// Returns true if the page content was actually processed
    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Returns true if the node was skipped
    pub fn is_skipped(&self) -> bool {
        !self.is_expanded()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::DepthLimited => "depth_limited",
            Self::FetchFailed => "fetch_failed",
        }
    }

    /// Returns all node outcomes
    pub fn all() -> [Self; 3] {
        [Self::Expanded, Self::DepthLimited, Self::FetchFailed]
    }
}

impl fmt::Display for NodeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to a single link extracted from an expanded page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkDisposition {
    /// Link points at a blacklisted hub page
    Blacklisted,

    /// Link was already claimed by this or another worker
    Duplicate,

    /// Link is the target; search concluded
    Target,

    /// Link was scored and pushed onto the frontier
    Enqueued,
}

impl LinkDisposition {
    /// Returns true if the link produced a new node
    pub fn creates_node(&self) -> bool {
        matches!(self, Self::Target | Self::Enqueued)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blacklisted => "blacklisted",
            Self::Duplicate => "duplicate",
            Self::Target => "target",
            Self::Enqueued => "enqueued",
        }
    }

    /// Returns all link dispositions
    pub fn all() -> [Self; 4] {
        [
            Self::Blacklisted,
            Self::Duplicate,
            Self::Target,
            Self::Enqueued,
        ]
    }
}

impl fmt::Display for LinkDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
