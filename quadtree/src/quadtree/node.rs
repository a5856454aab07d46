use super::Quadtree;
use common::{is_enclosing, Aabb};
use std::fmt;

/// Index of a node inside the tree's arena. Ids of collapsed nodes are recycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Child slot of a node. x grows east, y grows north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    /// Child array order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Quadrant::NorthEast => 0,
            Quadrant::NorthWest => 1,
            Quadrant::SouthWest => 2,
            Quadrant::SouthEast => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Quadrant::NorthEast => "NE",
            Quadrant::NorthWest => "NW",
            Quadrant::SouthWest => "SW",
            Quadrant::SouthEast => "SE",
        }
    }
}

pub(crate) struct Node<T> {
    pub(crate) bounds: Aabb,
    pub(crate) depth: u32,
    pub(crate) items: Vec<T>,
    pub(crate) children: Option<[NodeId; 4]>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) quadrant: Option<Quadrant>,
}

impl<T> Node<T> {
    pub(crate) fn new(
        bounds: Aabb,
        depth: u32,
        parent: Option<NodeId>,
        quadrant: Option<Quadrant>,
    ) -> Self {
        Self {
            bounds,
            depth,
            items: Vec::new(),
            children: None,
            parent,
            quadrant,
        }
    }

    // Reuse a released slot; keeps the item buffer's capacity.
    pub(crate) fn initialize(
        &mut self,
        bounds: Aabb,
        depth: u32,
        parent: Option<NodeId>,
        quadrant: Option<Quadrant>,
    ) {
        self.bounds = bounds;
        self.depth = depth;
        self.items.clear();
        self.children = None;
        self.parent = parent;
        self.quadrant = quadrant;
    }

    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// The quadrant of `bounds` that wholly holds `target`, if any.
///
/// A box touching or crossing either center line straddles and matches
/// nothing, and so does a box not enclosed by `bounds` at all or not
/// enclosed by the child bounds of its quadrant.
#[inline(always)]
pub(crate) fn match_quadrant(bounds: &Aabb, target: &Aabb) -> Option<Quadrant> {
    if !is_enclosing(bounds, target) {
        return None;
    }
    let center = bounds.center();
    let min = target.min();
    let max = target.max();

    let north = min.y > center.y;
    let south = max.y < center.y;
    let east = min.x > center.x;
    let west = max.x < center.x;

    let quadrant = match (north, south, east, west) {
        (true, _, true, _) => Quadrant::NorthEast,
        (true, _, _, true) => Quadrant::NorthWest,
        (_, true, _, true) => Quadrant::SouthWest,
        (_, true, true, _) => Quadrant::SouthEast,
        _ => return None,
    };
    // Child edges are rebuilt from center and extents and can miss the
    // center line by an ulp; a box in that gap stays with the parent.
    if !is_enclosing(&bounds.quadrants()[quadrant.index()], target) {
        return None;
    }
    Some(quadrant)
}

/// Read-only view of one node, handed to visitors and returned by lookups.
pub struct NodeRef<'a, T> {
    tree: &'a Quadtree<T>,
    id: NodeId,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a Quadtree<T>, id: NodeId) -> Self {
        Self { tree, id }
    }

    #[inline(always)]
    fn node(&self) -> &'a Node<T> {
        &self.tree.nodes[self.id.index()]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn bounds(&self) -> Aabb {
        self.node().bounds
    }

    pub fn depth(&self) -> u32 {
        self.node().depth
    }

    /// Items stored directly at this node, not in its descendants.
    pub fn items(&self) -> &'a [T] {
        &self.node().items
    }

    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    pub fn is_root(&self) -> bool {
        self.id == NodeId::ROOT
    }

    pub fn quadrant(&self) -> Option<Quadrant> {
        self.node().quadrant
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.node().parent.map(|id| NodeRef::new(self.tree, id))
    }

    pub fn children(&self) -> Option<[NodeRef<'a, T>; 4]> {
        self.node()
            .children
            .map(|ids| ids.map(|id| NodeRef::new(self.tree, id)))
    }

    /// Items held by this node and all of its descendants.
    pub fn item_count(&self) -> usize {
        self.tree.subtree_item_count(self.id)
    }

    /// Diagnostic name built from the quadrants on the way down, e.g. `root_NE_SW`.
    pub fn path(&self) -> String {
        let mut labels = Vec::new();
        let mut current = Some(*self);
        while let Some(node) = current {
            if let Some(quadrant) = node.quadrant() {
                labels.push(quadrant.label());
            }
            current = node.parent();
        }
        let mut path = String::from("root");
        for label in labels.iter().rev() {
            path.push('_');
            path.push_str(label);
        }
        path
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("bounds", &self.bounds())
            .field("depth", &self.depth())
            .field("items", &self.items().len())
            .field("leaf", &self.is_leaf())
            .finish()
    }
}
