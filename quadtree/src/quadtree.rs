mod api;
mod config;
mod core;
mod index;
mod maintenance;
mod node;
mod query;
mod traversal;

pub use config::Config;
pub use node::{NodeId, NodeRef, Quadrant};
pub use traversal::{Nodes, TraversalOrder};

use node::Node;

/// Dynamic region quadtree over caller-owned handles.
///
/// Every handle lives in exactly one node: the deepest node whose single
/// quadrant wholly holds its box. Handles straddling a center line stay at the
/// node where they straddle. Nodes are kept in an arena and addressed by
/// [`NodeId`]; the root is always slot 0.
pub struct Quadtree<T> {
    nodes: Vec<Node<T>>,
    free: Vec<NodeId>,
    len: usize,
    config: Config,
}
