//! Search coordinator - search orchestration logic
//!
//! This module owns the lifecycle of one search:
//! - Canonicalizing and validating the request
//! - Building the shared `SearchSession` and seeding its frontier
//! - Spawning the worker pool and waiting for every worker
//! - Reconstructing the path and assembling the final report

use crate::config::Config;
use crate::output::{SearchOutcome, SearchReport, StatsSnapshot};
use crate::search::cache::{CachedFetcher, PageCache};
use crate::search::fetcher::{HttpFetcher, PageFetcher};
use crate::search::parser::{LinkExtractor, WikiLinkExtractor};
use crate::search::path::reconstruct_from;
use crate::search::scorer::RelevanceScorer;
use crate::search::session::SearchSession;
use crate::search::worker::run_worker;
use crate::url::{canonicalize_url, Blacklist};
use crate::SearchError;
use std::sync::Arc;
use std::time::Instant;

/// What to search for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Page the path starts from
    pub start_url: String,

    /// Page the path must reach
    pub target_url: String,

    /// Nodes at this depth are never expanded; must be positive
    pub max_depth: u32,
}

impl SearchRequest {
    pub fn new(start_url: impl Into<String>, target_url: impl Into<String>, max_depth: u32) -> Self {
        Self {
            start_url: start_url.into(),
            target_url: target_url.into(),
            max_depth,
        }
    }
}

/// Main search coordinator structure
pub struct Coordinator<F, E> {
    workers: usize,
    scorer: RelevanceScorer,
    blacklist: Blacklist,
    fetcher: F,
    extractor: E,
}

impl<F: PageFetcher, E: LinkExtractor> Coordinator<F, E> {
    /// Creates a coordinator from configuration and its two collaborators
    pub fn new(config: &Config, fetcher: F, extractor: E) -> Self {
        Self {
            workers: config.search.workers,
            scorer: RelevanceScorer::new(&config.scoring),
            blacklist: Blacklist::new(config.blacklist.pages.iter().cloned()),
            fetcher,
            extractor,
        }
    }

    /// Overrides the configured worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Runs one search to completion
    ///
    /// 1. Canonicalize start and target, reject a zero depth or worker count
    /// 2. Answer `start == target` without fetching anything
    /// 3. Seed the frontier with the start node
    /// 4. Spawn the workers and wait for all of them
    /// 5. Rebuild the path from the published target node, if any
    ///
    /// # Returns
    ///
    /// * `Ok(SearchReport)` - The search ran; the outcome says whether a path exists
    /// * `Err(SearchError)` - Bad request or a worker task failed
    pub async fn run(self, request: &SearchRequest) -> Result<SearchReport, SearchError> {
        let started = Instant::now();

        let start = canonicalize_url(&request.start_url)?;
        let target = canonicalize_url(&request.target_url)?;

        if request.max_depth == 0 {
            return Err(SearchError::InvalidRequest(
                "max depth must be a positive integer".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(SearchError::InvalidRequest(
                "at least one worker is required".to_string(),
            ));
        }

        if start == target {
            tracing::info!("Start page is the target, nothing to search");
            return Ok(SearchReport {
                outcome: SearchOutcome::Found {
                    path: vec![start.clone()],
                },
                start,
                target,
                stats: StatsSnapshot::default(),
                elapsed: started.elapsed(),
            });
        }

        if self.blacklist.contains(&target) {
            tracing::warn!("Target {} is blacklisted and can never be reached", target);
        }

        tracing::info!(
            "Searching from {} to {} (max depth {}, {} workers)",
            start,
            target,
            request.max_depth,
            self.workers
        );

        let session = Arc::new(SearchSession::new(
            start,
            target,
            request.max_depth,
            self.scorer,
            self.blacklist,
            self.fetcher,
            self.extractor,
        ));
        session.seed();

        let handles: Vec<_> = (0..self.workers)
            .map(|worker_id| tokio::spawn(run_worker(worker_id, session.clone())))
            .collect();

        // Every worker is awaited before any failure is reported
        let mut failure = None;
        for handle in handles {
            match handle.await {
                Ok(exit) => tracing::trace!("Worker joined: {:?}", exit),
                Err(e) => {
                    tracing::error!("Search worker failed: {}", e);
                    failure.get_or_insert(e);
                }
            }
        }
        if let Some(e) = failure {
            return Err(e.into());
        }

        let outcome = match session.frontier().found() {
            Some(terminal) => SearchOutcome::Found {
                path: reconstruct_from(session.arena(), terminal.id),
            },
            None => SearchOutcome::NotFound,
        };

        let stats = session.stats().snapshot();
        let elapsed = started.elapsed();
        tracing::info!(
            "Search finished ({}): {} pages expanded, {} nodes created in {:.2?}",
            if outcome.is_found() { "found" } else { "not found" },
            stats.pages_expanded,
            session.arena().len(),
            elapsed
        );

        Ok(SearchReport {
            start: session.start().to_string(),
            target: session.target().to_string(),
            outcome,
            stats,
            elapsed,
        })
    }
}

/// Runs a search against the configured wiki over HTTP
///
/// Pages are served from the on-disk cache when `fetch.use-cache` is set.
///
/// # Example
///
/// ```no_run
/// use wikipath::config::Config;
/// use wikipath::search::{run_search, SearchRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let request = SearchRequest::new(
///     "https://en.wikipedia.org/wiki/Linux",
///     "https://en.wikipedia.org/wiki/Rutgers_University-Camden",
///     6,
/// );
/// let report = run_search(&Config::default(), &request).await?;
/// println!("{:?}", report.outcome);
/// # Ok(())
/// # }
/// ```
pub async fn run_search(config: &Config, request: &SearchRequest) -> Result<SearchReport, SearchError> {
    let extractor = WikiLinkExtractor::new(&config.links)?;
    let fetcher = HttpFetcher::new(&config.fetch)?;

    if config.fetch.use_cache {
        let cache = PageCache::open(&config.fetch.cache_dir)?;
        tracing::debug!("Using page cache at {}", cache.dir().display());
        Coordinator::new(config, CachedFetcher::new(fetcher, cache), extractor)
            .run(request)
            .await
    } else {
        Coordinator::new(config, fetcher, extractor).run(request).await
    }
}
