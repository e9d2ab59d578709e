//! Shared state of one running search

use crate::output::SearchStats;
use crate::search::arena::{FrontierNode, NodeArena};
use crate::search::fetcher::PageFetcher;
use crate::search::frontier::PriorityFrontier;
use crate::search::parser::LinkExtractor;
use crate::search::scorer::RelevanceScorer;
use crate::search::visited::VisitedSet;
use crate::url::Blacklist;

/// Everything the workers of one search share
///
/// Created by the coordinator, handed to every worker behind an `Arc` and
/// dropped (arena included) once the last worker has exited.
#[derive(Debug)]
pub struct SearchSession<F, E> {
    pub(super) start: String,
    pub(super) target: String,
    pub(super) max_depth: u32,
    pub(super) frontier: PriorityFrontier,
    pub(super) visited: VisitedSet,
    pub(super) arena: NodeArena,
    pub(super) scorer: RelevanceScorer,
    pub(super) blacklist: Blacklist,
    pub(super) fetcher: F,
    pub(super) extractor: E,
    pub(super) stats: SearchStats,
}

impl<F: PageFetcher, E: LinkExtractor> SearchSession<F, E> {
    /// Creates a session for canonical `start` and `target` URLs
    pub fn new(
        start: String,
        target: String,
        max_depth: u32,
        scorer: RelevanceScorer,
        blacklist: Blacklist,
        fetcher: F,
        extractor: E,
    ) -> Self {
        Self {
            start,
            target,
            max_depth,
            frontier: PriorityFrontier::new(),
            visited: VisitedSet::new(),
            arena: NodeArena::new(),
            scorer,
            blacklist,
            fetcher,
            extractor,
            stats: SearchStats::new(),
        }
    }

    /// Claims the start URL and queues the root node
    pub fn seed(&self) -> FrontierNode {
        self.visited.mark_if_unvisited(&self.start);
        let priority = self.scorer.score(&self.start, &self.target);
        let root = self.arena.alloc(self.start.clone(), 0, priority, None);
        self.frontier.push(root.clone());
        root
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn frontier(&self) -> &PriorityFrontier {
        &self.frontier
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
