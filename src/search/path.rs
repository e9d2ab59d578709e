//! Path reconstruction from parent links

use crate::search::arena::{FrontierNode, NodeArena, NodeId};

/// Walks parent links from `terminal` to the root and returns the URLs start→terminal
///
/// `nodes` is the arena's node table, indexed by `NodeId`. A dangling parent
/// id ends the walk at the last node that could be resolved.
pub fn reconstruct(nodes: &[FrontierNode], terminal: NodeId) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = nodes.get(terminal.index());

    while let Some(node) = current {
        path.push(node.url.clone());
        // Parents are always allocated before their children
        current = node
            .parent
            .filter(|parent| parent.index() < node.id.index())
            .and_then(|parent| nodes.get(parent.index()));
    }

    path.reverse();
    path
}

/// Reconstructs the path ending at `terminal` from a live arena
pub fn reconstruct_from(arena: &NodeArena, terminal: NodeId) -> Vec<String> {
    arena.with_nodes(|nodes| reconstruct(nodes, terminal))
}
