use super::core::NodeStack;
use super::node::{NodeId, NodeRef};
use super::Quadtree;
use std::collections::VecDeque;

/// Order in which [`Quadtree::traverse`] visits nodes.
///
/// Children are always taken in `NE, NW, SW, SE` order. `InOrder` visits
/// the first two children, then the node, then the last two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    PreOrder,
    InOrder,
    PostOrder,
    BreadthFirst,
}

impl<T> Quadtree<T> {
    /// Apply `visitor` to every live node. Only meant for dumps and checks;
    /// nothing in the tree depends on the visiting order.
    pub fn traverse<'a, F>(&'a self, order: TraversalOrder, mut visitor: F)
    where
        F: FnMut(NodeRef<'a, T>),
    {
        match order {
            TraversalOrder::PreOrder => self.visit_pre_order(NodeId::ROOT, &mut visitor),
            TraversalOrder::InOrder => self.visit_in_order(NodeId::ROOT, &mut visitor),
            TraversalOrder::PostOrder => self.visit_post_order(NodeId::ROOT, &mut visitor),
            TraversalOrder::BreadthFirst => self.visit_breadth_first(&mut visitor),
        }
    }

    fn visit_pre_order<'a, F>(&'a self, id: NodeId, visitor: &mut F)
    where
        F: FnMut(NodeRef<'a, T>),
    {
        visitor(NodeRef::new(self, id));
        if let Some(children) = self.node(id).children {
            for child in children {
                self.visit_pre_order(child, visitor);
            }
        }
    }

    fn visit_in_order<'a, F>(&'a self, id: NodeId, visitor: &mut F)
    where
        F: FnMut(NodeRef<'a, T>),
    {
        match self.node(id).children {
            Some([ne, nw, sw, se]) => {
                self.visit_in_order(ne, visitor);
                self.visit_in_order(nw, visitor);
                visitor(NodeRef::new(self, id));
                self.visit_in_order(sw, visitor);
                self.visit_in_order(se, visitor);
            }
            None => visitor(NodeRef::new(self, id)),
        }
    }

    fn visit_post_order<'a, F>(&'a self, id: NodeId, visitor: &mut F)
    where
        F: FnMut(NodeRef<'a, T>),
    {
        if let Some(children) = self.node(id).children {
            for child in children {
                self.visit_post_order(child, visitor);
            }
        }
        visitor(NodeRef::new(self, id));
    }

    fn visit_breadth_first<'a, F>(&'a self, visitor: &mut F)
    where
        F: FnMut(NodeRef<'a, T>),
    {
        let mut queue = VecDeque::new();
        queue.push_back(NodeId::ROOT);
        while let Some(id) = queue.pop_front() {
            visitor(NodeRef::new(self, id));
            if let Some(children) = self.node(id).children {
                queue.extend(children);
            }
        }
    }

    /// Lazy pre-order walk over every live node.
    pub fn nodes(&self) -> Nodes<'_, T> {
        let mut stack = NodeStack::new();
        stack.push(NodeId::ROOT);
        Nodes { tree: self, stack }
    }
}

/// Iterator returned by [`Quadtree::nodes`].
pub struct Nodes<'a, T> {
    tree: &'a Quadtree<T>,
    stack: NodeStack,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        if let Some(children) = self.tree.node(id).children {
            // Reversed so NE comes off the stack first.
            self.stack.extend(children.into_iter().rev());
        }
        Some(NodeRef::new(self.tree, id))
    }
}
