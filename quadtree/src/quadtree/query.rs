use super::core::NodeStack;
use super::node::{NodeId, NodeRef};
use super::Quadtree;
use common::{is_disjoint, is_enclosing, Aabb};

impl<T> Quadtree<T> {
    /// Broad-phase candidates: every item stored in a node whose bounds
    /// overlap `region`. This over-approximates; the caller still has to
    /// test the boxes themselves. An item is reported at most once.
    pub fn get_items_by_area(&self, region: &Aabb) -> Vec<&T> {
        let mut items = Vec::new();
        self.for_each_in_area(region, |item| items.push(item));
        items
    }

    pub fn for_each_in_area<'a, F>(&'a self, region: &Aabb, mut f: F)
    where
        F: FnMut(&'a T),
    {
        let mut stack = NodeStack::new();
        stack.push(NodeId::ROOT);
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            let disjoint = is_disjoint(&node.bounds, region);
            // The root may hold items lying outside its own bounds.
            if disjoint && id != NodeId::ROOT {
                continue;
            }
            if let Some(children) = node.children.filter(|_| !disjoint) {
                stack.extend(children);
            }
            for item in &node.items {
                f(item);
            }
        }
    }

    /// Smallest node wholly enclosing `region`, starting from the root.
    /// Falls back to the root when no child encloses it.
    pub fn get_node(&self, region: &Aabb) -> NodeRef<'_, T> {
        let mut id = NodeId::ROOT;
        'descend: loop {
            let Some(children) = self.node(id).children else {
                break;
            };
            for child in children {
                if is_enclosing(&self.node(child).bounds, region) {
                    id = child;
                    continue 'descend;
                }
            }
            break;
        }
        NodeRef::new(self, id)
    }

    /// Like [`Quadtree::get_node`], but `None` when `region` lies entirely
    /// outside the tree.
    pub fn get_enclosing_node(&self, region: &Aabb) -> Option<NodeRef<'_, T>> {
        if is_disjoint(&self.bounds(), region) {
            return None;
        }
        Some(self.get_node(region))
    }
}
