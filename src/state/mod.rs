//! State module for tracking search progress
//!
//! # Components
//!
//! - `NodeOutcome`: what a worker did with a node it dequeued (expanded, dropped at the depth limit, fetch failed)
//! - `LinkDisposition`: what happened to each link extracted from an expanded page

mod node_state;

// Re-export main types
pub use node_state::{LinkDisposition, NodeOutcome};
