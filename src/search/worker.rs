//! Search worker loop

use crate::search::arena::FrontierNode;
use crate::search::fetcher::PageFetcher;
use crate::search::parser::LinkExtractor;
use crate::search::session::SearchSession;
use crate::state::{LinkDisposition, NodeOutcome};
use std::sync::Arc;

/// Why a worker stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerExit {
    /// Frontier drained with nobody left expanding
    Exhausted,

    /// This worker published the target node
    FoundTarget,

    /// Another worker published the target first
    PeerFound,
}

/// Runs one worker until the frontier tells it to stop
///
/// Each dequeued node is either discarded at the depth limit, skipped when
/// its page cannot be fetched, or expanded: every extracted link is
/// blacklist-checked, claimed in the visited set, compared against the
/// target and otherwise scored and queued one level deeper.
pub async fn run_worker<F, E>(worker_id: usize, session: Arc<SearchSession<F, E>>) -> WorkerExit
where
    F: PageFetcher,
    E: LinkExtractor,
{
    tracing::debug!("Worker {} started", worker_id);

    while let Some(expansion) = session.frontier.pop().await {
        let node = expansion.node();

        if node.depth >= session.max_depth {
            tracing::trace!("Worker {}: depth limit at {}", worker_id, node.url);
            session.stats.record_node(NodeOutcome::DepthLimited);
            continue;
        }

        tracing::info!("Crawling: {} (depth {})", node.url, node.depth);

        let Some(body) = session.fetcher.fetch(&node.url).await.into_body() else {
            tracing::debug!("Worker {}: fetch failed for {}", worker_id, node.url);
            session.stats.record_node(NodeOutcome::FetchFailed);
            continue;
        };
        session.stats.record_node(NodeOutcome::Expanded);

        let links = session.extractor.extract_links(&node.url, &body);
        tracing::debug!("Worker {}: {} links on {}", worker_id, links.len(), node.url);

        if let Some(exit) = expand_links(&session, node, links) {
            tracing::debug!("Worker {} stopping: {:?}", worker_id, exit);
            return exit;
        }
    }

    let exit = if session.frontier.is_found() {
        WorkerExit::PeerFound
    } else {
        WorkerExit::Exhausted
    };
    tracing::debug!("Worker {} stopping: {:?}", worker_id, exit);
    exit
}

/// Processes the links of an expanded node
///
/// Returns `Some` once the search is over for this worker.
fn expand_links<F, E>(
    session: &SearchSession<F, E>,
    parent: &FrontierNode,
    links: Vec<String>,
) -> Option<WorkerExit> {
    let child_depth = parent.depth + 1;

    for link in links {
        if session.frontier.is_found() {
            return Some(WorkerExit::PeerFound);
        }

        if session.blacklist.contains(&link) {
            session.stats.record_link(LinkDisposition::Blacklisted);
            continue;
        }

        if !session.visited.mark_if_unvisited(&link) {
            session.stats.record_link(LinkDisposition::Duplicate);
            continue;
        }

        if link == session.target {
            session.stats.record_link(LinkDisposition::Target);
            let priority = session.scorer.exact_match_score();
            let terminal = session.arena.alloc(link, child_depth, priority, Some(parent.id));
            return Some(if session.frontier.mark_found(terminal) {
                tracing::info!("Target reached from {}", parent.url);
                WorkerExit::FoundTarget
            } else {
                WorkerExit::PeerFound
            });
        }

        let priority = session.scorer.score(&link, &session.target);
        let child = session.arena.alloc(link, child_depth, priority, Some(parent.id));
        if session.frontier.push(child) {
            session.stats.record_link(LinkDisposition::Enqueued);
        }
    }

    None
}
