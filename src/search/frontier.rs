//! Priority frontier shared by all search workers
//!
//! This module handles:
//! - Priority ordering of discovered nodes (FIFO among equal priorities)
//! - Blocking `pop` for idle workers
//! - Termination detection when the queue is empty and nobody is expanding
//! - Publishing the terminal node once the target is found
//!
//! A worker counts as active from the moment `pop` hands it a node (same
//! critical section) until it drops the returned `Expansion`, which it does
//! only after pushing every child. An empty queue with zero active workers
//! therefore means no more work can ever appear.

use crate::search::arena::FrontierNode;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

/// Internal state protected by the frontier mutex
#[derive(Debug, Default)]
struct FrontierState {
    /// Pending nodes, priority descending, arrival order among ties
    queue: VecDeque<FrontierNode>,

    /// Workers currently expanding a dequeued node
    active_workers: usize,

    /// Terminal node; set at most once, never cleared
    found: Option<FrontierNode>,
}

/// Concurrent priority work queue with blocking pop
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    state: Mutex<FrontierState>,
    wakeup: Notify,
}

/// A dequeued node together with its holder's active-worker slot
///
/// Dropping the expansion releases the slot. If that leaves the frontier
/// idle and empty, every blocked waiter is woken so it can observe
/// termination.
#[derive(Debug)]
pub struct Expansion<'a> {
    node: FrontierNode,
    frontier: &'a PriorityFrontier,
}

impl Expansion<'_> {
    pub fn node(&self) -> &FrontierNode {
        &self.node
    }
}

impl Drop for Expansion<'_> {
    fn drop(&mut self) {
        self.frontier.finish_expansion();
    }
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FrontierState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts a node by priority and wakes one waiter
    ///
    /// The node goes after every queued node whose priority is >= its own, so
    /// higher priorities come first and equal priorities keep arrival order.
    /// Pushes after the target was found are dropped; returns whether the
    /// node was queued.
    pub fn push(&self, node: FrontierNode) -> bool {
        {
            let mut state = self.lock();
            if state.found.is_some() {
                tracing::trace!("Target already found, dropping {}", node.url);
                return false;
            }

            let index = state
                .queue
                .partition_point(|queued| queued.priority >= node.priority);
            state.queue.insert(index, node);
        }

        self.wakeup.notify_one();
        true
    }

    /// Takes the highest-priority node, waiting while other workers may still produce work
    ///
    /// Re-evaluated under the lock every time the caller wakes:
    /// 1. Target found: return `None`
    /// 2. Queue non-empty: return its head
    /// 3. Queue empty and no active workers: wake every waiter, return `None`
    /// 4. Otherwise wait for a push, a finished expansion, or `mark_found`
    pub async fn pop(&self) -> Option<Expansion<'_>> {
        loop {
            // Registered before the state check so a wake-up between the
            // check and the await is not lost.
            let notified = self.wakeup.notified();
            tokio::pin!(notified);

            {
                let mut state = self.lock();

                if state.found.is_some() {
                    return None;
                }

                if let Some(node) = state.queue.pop_front() {
                    state.active_workers += 1;
                    return Some(Expansion { node, frontier: self });
                }

                if state.active_workers == 0 {
                    self.wakeup.notify_waiters();
                    return None;
                }

                notified.as_mut().enable();
            }

            notified.await;
        }
    }

    fn finish_expansion(&self) {
        let mut state = self.lock();
        state.active_workers = state.active_workers.saturating_sub(1);
        if state.active_workers == 0 && state.queue.is_empty() {
            self.wakeup.notify_waiters();
        }
    }

    /// Publishes the terminal node and wakes every waiter
    ///
    /// First writer wins: returns true only for the call that set the flag.
    /// Later calls leave the published node untouched.
    pub fn mark_found(&self, target: FrontierNode) -> bool {
        let mut state = self.lock();
        if state.found.is_some() {
            tracing::debug!("Target already published, ignoring {}", target.url);
            return false;
        }

        state.found = Some(target);
        self.wakeup.notify_waiters();
        true
    }

    /// Returns true once the target has been found
    pub fn is_found(&self) -> bool {
        self.lock().found.is_some()
    }

    /// The published terminal node, if any
    pub fn found(&self) -> Option<FrontierNode> {
        self.lock().found.clone()
    }

    /// Returns the number of queued nodes
    pub fn len(&self) -> usize {
        self.lock().queue.len()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.lock().queue.is_empty()
    }

    /// Returns the number of workers currently holding an expansion
    pub fn active_workers(&self) -> usize {
        self.lock().active_workers
    }
}
