//! Node arena for the search tree
//!
//! Every node the search creates is appended here and addressed by a
//! `NodeId`. Parent links are ids, so a node stays reachable for path
//! reconstruction long after it has left the frontier; the arena is
//! released as a whole when the search session is dropped.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Index of a node inside its `NodeArena`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One discovered page candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierNode {
    /// Arena slot of this node
    pub id: NodeId,

    /// Canonical URL of the page
    pub url: String,

    /// Distance from the start node (start = 0)
    pub depth: u32,

    /// Relevance score computed when the node was created
    pub priority: i32,

    /// Node this one was discovered from; `None` for the start node
    pub parent: Option<NodeId>,
}

/// Append-only store of every node created during a search
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Mutex<Vec<FrontierNode>>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<FrontierNode>> {
        // Nodes are only ever appended, so a poisoned vector is still consistent.
        self.nodes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates a node and returns a copy of it
    pub fn alloc(
        &self,
        url: impl Into<String>,
        depth: u32,
        priority: i32,
        parent: Option<NodeId>,
    ) -> FrontierNode {
        let mut nodes = self.lock();
        let node = FrontierNode {
            id: NodeId(nodes.len()),
            url: url.into(),
            depth,
            priority,
            parent,
        };
        nodes.push(node.clone());
        node
    }

    /// Looks up a node by id
    pub fn get(&self, id: NodeId) -> Option<FrontierNode> {
        self.lock().get(id.0).cloned()
    }

    /// Number of nodes created so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Runs `f` over the node table while holding the arena lock
    pub fn with_nodes<R>(&self, f: impl FnOnce(&[FrontierNode]) -> R) -> R {
        f(&self.lock())
    }
}
