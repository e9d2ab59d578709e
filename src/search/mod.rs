//! Search module for concurrent path finding
//!
//! This module contains the core search logic, including:
//! - Shared search state (frontier, visited set, node arena)
//! - The relevance heuristic used as frontier priority
//! - Page fetching, caching and link extraction collaborators
//! - The worker loop and overall search coordination

mod arena;
mod cache;
mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod path;
mod scorer;
mod session;
mod visited;
mod worker;

pub use arena::{FrontierNode, NodeArena, NodeId};
pub use cache::{CachedFetcher, PageCache};
pub use coordinator::{run_search, Coordinator, SearchRequest};
pub use fetcher::{build_http_client, fetch_url, FetchResult, HttpFetcher, PageFetcher};
pub use frontier::{Expansion, PriorityFrontier};
pub use parser::{LinkExtractor, WikiLinkExtractor};
pub use path::{reconstruct, reconstruct_from};
pub use scorer::RelevanceScorer;
pub use session::SearchSession;
pub use visited::VisitedSet;
pub use worker::{run_worker, WorkerExit};
