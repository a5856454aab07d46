use super::node::{match_quadrant, Node, NodeId, NodeRef};
use super::{Quadtree, TraversalOrder};
use crate::error::{QuadtreeError, QuadtreeResult};
use common::{is_enclosing, Bounded};
use fxhash::FxHashSet;
use std::fmt;
use tracing::debug;

impl<T> Quadtree<T> {
    /// Drop every item and node, leaving an empty root leaf with the same
    /// bounds and configuration.
    pub fn clear(&mut self) {
        let bounds = self.bounds();
        self.nodes.clear();
        self.nodes.push(Node::new(bounds, 0, None, None));
        self.free.clear();
        self.len = 0;
    }
}

impl<T: Bounded> Quadtree<T> {
    /// Throw the current layout away and insert `items` from scratch.
    pub fn rebuild<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        for item in items {
            self.insert(item);
        }
        debug!(
            items = self.len,
            nodes = self.node_count(),
            "rebuilt quadtree"
        );
    }

    /// Walk the whole tree and verify its structural invariants: depth and
    /// parent links, child bounds, item placement, and the cached item count.
    pub fn check_invariants(&self) -> QuadtreeResult<()> {
        let mut visited = FxHashSet::default();
        let mut items = 0usize;
        let mut result = Ok(());

        self.traverse(TraversalOrder::PreOrder, |node| {
            if result.is_err() {
                return;
            }
            visited.insert(node.id());
            items += node.items().len();
            result = self.check_node(node);
        });
        result?;

        if items != self.len {
            return Err(violation(
                self.root(),
                format!("item count is {} but {} items are stored", self.len, items),
            ));
        }
        for id in &self.free {
            if visited.contains(id) {
                return Err(QuadtreeError::InvariantViolation {
                    node: format!("node #{}", id.index()),
                    reason: "node is both reachable and on the free list".to_string(),
                });
            }
        }
        if visited.len() + self.free.len() != self.nodes.len() {
            return Err(violation(
                self.root(),
                format!(
                    "{} reachable and {} free nodes out of {} allocated",
                    visited.len(),
                    self.free.len(),
                    self.nodes.len()
                ),
            ));
        }
        Ok(())
    }

    fn check_node(&self, node: NodeRef<'_, T>) -> QuadtreeResult<()> {
        let depth = node.depth();
        if depth > self.config.max_depth {
            return Err(violation(node, format!("depth {} exceeds max depth", depth)));
        }
        match node.parent() {
            None if node.id() != NodeId::ROOT => {
                return Err(violation(node, "non-root node without a parent".to_string()));
            }
            None if depth != 0 => {
                return Err(violation(node, format!("root at depth {}", depth)));
            }
            Some(parent) if parent.depth() + 1 != depth => {
                return Err(violation(
                    node,
                    format!("depth {} under a parent at depth {}", depth, parent.depth()),
                ));
            }
            _ => {}
        }

        if let Some(children) = node.children() {
            let expected = node.bounds().quadrants();
            for (slot, child) in children.iter().enumerate() {
                if child.parent().map(|parent| parent.id()) != Some(node.id()) {
                    return Err(violation(*child, "parent link does not point back".to_string()));
                }
                if child.quadrant().map(|quadrant| quadrant.index()) != Some(slot) {
                    return Err(violation(*child, "quadrant tag does not match its slot".to_string()));
                }
                if child.bounds() != expected[slot] {
                    return Err(violation(*child, "bounds are not a quarter of the parent".to_string()));
                }
            }
            for item in node.items() {
                if match_quadrant(&node.bounds(), &item.aabb()).is_some() {
                    return Err(violation(
                        node,
                        format!("item {} fits a child but is held by an internal node", item.aabb()),
                    ));
                }
            }
        }

        // Items the root holds may lie partly or wholly outside the tree.
        if !node.is_root() {
            for item in node.items() {
                if !is_enclosing(&node.bounds(), &item.aabb()) {
                    return Err(violation(
                        node,
                        format!("item {} is not enclosed by the node", item.aabb()),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn violation<T>(node: NodeRef<'_, T>, reason: String) -> QuadtreeError {
    QuadtreeError::InvariantViolation {
        node: node.path(),
        reason,
    }
}

/// One line per node in pre-order, indented with `>` per level.
impl<T> fmt::Display for Quadtree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes() {
            let marker = ">".repeat(node.depth() as usize + 1);
            writeln!(
                f,
                "{} {} [{}] items={}",
                marker,
                node.path(),
                node.bounds(),
                node.items().len()
            )?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for Quadtree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quadtree")
            .field("bounds", &self.bounds())
            .field("config", &self.config)
            .field("len", &self.len)
            .field("nodes", &self.node_count())
            .finish()
    }
}
