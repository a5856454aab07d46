use super::node::{match_quadrant, Node, NodeId, Quadrant};
use super::Quadtree;
use common::{Aabb, Bounded};
use smallvec::SmallVec;
use tracing::{debug, trace};

pub(crate) type NodeStack = SmallVec<[NodeId; 64]>;

impl<T> Quadtree<T> {
    #[inline(always)]
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.index()]
    }

    /// Walk down from the root while some child quadrant wholly holds `target`.
    /// This is where an item with that box is stored, or would be.
    pub(crate) fn descend(&self, target: &Aabb) -> NodeId {
        let mut id = NodeId::ROOT;
        loop {
            let node = self.node(id);
            let Some(children) = node.children else {
                return id;
            };
            match match_quadrant(&node.bounds, target) {
                Some(quadrant) => id = children[quadrant.index()],
                None => return id,
            }
        }
    }

    fn alloc_node(
        &mut self,
        bounds: Aabb,
        depth: u32,
        parent: NodeId,
        quadrant: Quadrant,
    ) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.node_mut(id)
                    .initialize(bounds, depth, Some(parent), Some(quadrant));
                id
            }
            None => {
                let id = NodeId(self.nodes.len() as u32);
                self.nodes
                    .push(Node::new(bounds, depth, Some(parent), Some(quadrant)));
                id
            }
        }
    }

    // Drop the whole subtree under `id` and hand the slots back to the free list.
    fn release_children(&mut self, id: NodeId) {
        let mut stack = NodeStack::new();
        if let Some(children) = self.node_mut(id).children.take() {
            stack.extend(children);
        }
        while let Some(child) = stack.pop() {
            let node = self.node_mut(child);
            debug_assert!(node.items.is_empty(), "released node still holds items");
            node.items.clear();
            node.parent = None;
            if let Some(grandchildren) = node.children.take() {
                stack.extend(grandchildren);
            }
            self.free.push(child);
        }
    }

    pub(crate) fn subtree_item_count(&self, id: NodeId) -> usize {
        let mut count = 0;
        let mut stack = NodeStack::new();
        stack.push(id);
        while let Some(current) = stack.pop() {
            let node = self.node(current);
            count += node.items.len();
            if let Some(children) = node.children {
                stack.extend(children);
            }
        }
        count
    }

    fn descendants_empty(&self, id: NodeId) -> bool {
        let mut stack = NodeStack::new();
        if let Some(children) = self.node(id).children {
            stack.extend(children);
        }
        while let Some(current) = stack.pop() {
            let node = self.node(current);
            if !node.items.is_empty() {
                return false;
            }
            if let Some(children) = node.children {
                stack.extend(children);
            }
        }
        true
    }

    // After a removal at `id`, fold back every ancestor whose descendants
    // are all empty. Stops at the first node that still has descendant items.
    fn collapse_upwards(&mut self, id: NodeId) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if !self.node(node_id).is_leaf() {
                if !self.descendants_empty(node_id) {
                    break;
                }
                self.release_children(node_id);
                debug!(
                    node = node_id.index(),
                    depth = self.node(node_id).depth,
                    "collapsed quadtree node back to a leaf"
                );
            }
            current = self.node(node_id).parent;
        }
    }
}

impl<T: Bounded> Quadtree<T> {
    pub fn insert(&mut self, item: T) {
        let aabb = item.aabb();
        let id = self.descend(&aabb);
        let max_items = self.config.max_items_per_node as usize;
        let max_depth = self.config.max_depth;

        let node = self.node_mut(id);
        node.items.push(item);
        self.len += 1;

        let node = self.node(id);
        trace!(node = id.index(), depth = node.depth, "inserted item");
        if node.is_leaf() && node.items.len() > max_items && node.depth < max_depth {
            self.split(id);
        }
    }

    // Leaf -> internal. Items that now fit a single quadrant drop exactly one
    // level; the fresh children are not split here even if they overflow.
    fn split(&mut self, id: NodeId) {
        let (bounds, depth) = {
            let node = self.node(id);
            debug_assert!(node.is_leaf(), "split called on an internal node");
            (node.bounds, node.depth)
        };

        let quadrant_bounds = bounds.quadrants();
        let mut children = [NodeId::ROOT; 4];
        for quadrant in Quadrant::ALL {
            children[quadrant.index()] =
                self.alloc_node(quadrant_bounds[quadrant.index()], depth + 1, id, quadrant);
        }

        let items = std::mem::take(&mut self.node_mut(id).items);
        let mut straddling = Vec::new();
        let mut moved = 0usize;
        for item in items {
            match match_quadrant(&bounds, &item.aabb()) {
                Some(quadrant) => {
                    self.node_mut(children[quadrant.index()]).items.push(item);
                    moved += 1;
                }
                None => straddling.push(item),
            }
        }

        let node = self.node_mut(id);
        node.items = straddling;
        node.children = Some(children);
        debug!(
            node = id.index(),
            depth,
            moved,
            straddling = node.items.len(),
            "split quadtree node"
        );
    }

    /// Remove `item` from the node its box leads to. Returns `false` when it
    /// is not there, which covers handles that were already removed.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let id = self.descend(&item.aabb());
        let node = self.node_mut(id);
        let Some(position) = node.items.iter().position(|stored| stored == item) else {
            trace!(node = id.index(), "remove found no matching item");
            return false;
        };
        node.items.swap_remove(position);
        self.len -= 1;
        self.collapse_upwards(id);
        true
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let id = self.descend(&item.aabb());
        self.node(id).items.iter().any(|stored| stored == item)
    }
}
