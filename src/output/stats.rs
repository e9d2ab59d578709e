//! Search statistics
//!
//! Workers record what they did with every node and link into a shared,
//! lock-free `SearchStats`; a `StatsSnapshot` is taken once the pool has
//! stopped and can be printed or logged.

use crate::state::{LinkDisposition, NodeOutcome};
use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters shared by all workers of one search
#[derive(Debug, Default)]
pub struct SearchStats {
    expanded: AtomicU64,
    depth_limited: AtomicU64,
    fetch_failed: AtomicU64,
    links_blacklisted: AtomicU64,
    links_duplicate: AtomicU64,
    links_target: AtomicU64,
    links_enqueued: AtomicU64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records what a worker did with a dequeued node
    pub fn record_node(&self, outcome: NodeOutcome) {
        let counter = match outcome {
            NodeOutcome::Expanded => &self.expanded,
            NodeOutcome::DepthLimited => &self.depth_limited,
            NodeOutcome::FetchFailed => &self.fetch_failed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Records what happened to one extracted link
    pub fn record_link(&self, disposition: LinkDisposition) {
        let counter = match disposition {
            LinkDisposition::Blacklisted => &self.links_blacklisted,
            LinkDisposition::Duplicate => &self.links_duplicate,
            LinkDisposition::Target => &self.links_target,
            LinkDisposition::Enqueued => &self.links_enqueued,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Takes a point-in-time copy of the counters
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            pages_expanded: self.expanded.load(Ordering::Relaxed),
            depth_limited: self.depth_limited.load(Ordering::Relaxed),
            fetch_failures: self.fetch_failed.load(Ordering::Relaxed),
            links_blacklisted: self.links_blacklisted.load(Ordering::Relaxed),
            links_duplicate: self.links_duplicate.load(Ordering::Relaxed),
            links_target: self.links_target.load(Ordering::Relaxed),
            links_enqueued: self.links_enqueued.load(Ordering::Relaxed),
        }
    }
}

/// Search statistics summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Pages fetched and parsed
    pub pages_expanded: u64,

    /// Nodes dropped because they sat at the maximum depth
    pub depth_limited: u64,

    /// Nodes skipped because their fetch failed
    pub fetch_failures: u64,

    /// Links skipped as blacklisted hub pages
    pub links_blacklisted: u64,

    /// Links skipped because another node already claimed the URL
    pub links_duplicate: u64,

    /// Links matching the target (at most one per search is published)
    pub links_target: u64,

    /// Links pushed onto the frontier
    pub links_enqueued: u64,
}

impl StatsSnapshot {
    /// Count recorded for one node outcome
    pub fn node_count(&self, outcome: NodeOutcome) -> u64 {
        match outcome {
            NodeOutcome::Expanded => self.pages_expanded,
            NodeOutcome::DepthLimited => self.depth_limited,
            NodeOutcome::FetchFailed => self.fetch_failures,
        }
    }

    /// Count recorded for one link disposition
    pub fn link_count(&self, disposition: LinkDisposition) -> u64 {
        match disposition {
            LinkDisposition::Blacklisted => self.links_blacklisted,
            LinkDisposition::Duplicate => self.links_duplicate,
            LinkDisposition::Target => self.links_target,
            LinkDisposition::Enqueued => self.links_enqueued,
        }
    }

    /// Number of nodes that left the frontier
    pub fn nodes_dequeued(&self) -> u64 {
        NodeOutcome::all().into_iter().map(|o| self.node_count(o)).sum()
    }

    /// Dequeued nodes that were dropped instead of expanded
    pub fn nodes_skipped(&self) -> u64 {
        NodeOutcome::all()
            .into_iter()
            .filter(NodeOutcome::is_skipped)
            .map(|o| self.node_count(o))
            .sum()
    }

    /// Number of links extracted from expanded pages and examined
    pub fn links_seen(&self) -> u64 {
        LinkDisposition::all().into_iter().map(|d| self.link_count(d)).sum()
    }

    /// Links that produced a new search node
    pub fn nodes_created(&self) -> u64 {
        LinkDisposition::all()
            .into_iter()
            .filter(LinkDisposition::creates_node)
            .map(|d| self.link_count(d))
            .sum()
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &StatsSnapshot) {
    println!("=== Search Statistics ===\n");

    println!("Nodes ({} dequeued, {} skipped):", stats.nodes_dequeued(), stats.nodes_skipped());
    for outcome in NodeOutcome::all() {
        println!("  {}: {}", outcome, stats.node_count(outcome));
    }
    println!();

    println!("Links ({} examined, {} new nodes):", stats.links_seen(), stats.nodes_created());
    for disposition in LinkDisposition::all() {
        println!("  {}: {}", disposition, stats.link_count(disposition));
    }
    println!();

    let dequeued = stats.nodes_dequeued();
    let success_rate = if dequeued > 0 {
        (stats.pages_expanded as f64 / dequeued as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "Expansion Rate: {:.1}% ({} / {} dequeued nodes expanded)",
        success_rate, stats.pages_expanded, dequeued
    );
}
