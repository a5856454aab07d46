use super::node::{Node, NodeId, NodeRef};
use super::{Config, Quadtree};
use crate::error::{QuadtreeError, QuadtreeResult};
use common::{Aabb, PartitionSettings};
use tracing::debug;

impl<T> Quadtree<T> {
    pub fn new(bounds: Aabb, max_items_per_node: u32, max_depth: u32) -> QuadtreeResult<Self> {
        Self::new_with_config(bounds, Config::new(max_items_per_node, max_depth))
    }

    pub fn new_with_config(bounds: Aabb, config: Config) -> QuadtreeResult<Self> {
        if let Err(err) = config.validate() {
            debug!(?config, %err, "rejected quadtree configuration");
            return Err(err);
        }
        let extents = bounds.extents();
        if !bounds.is_finite() || extents.x <= 0.0 || extents.y <= 0.0 {
            let center = bounds.center();
            return Err(QuadtreeError::InvalidBounds {
                center_x: center.x,
                center_y: center.y,
                extents_x: extents.x,
                extents_y: extents.y,
            });
        }
        Ok(Self {
            nodes: vec![Node::new(bounds, 0, None, None)],
            free: Vec::new(),
            len: 0,
            config,
        })
    }

    pub fn from_settings(bounds: Aabb, settings: &PartitionSettings) -> QuadtreeResult<Self> {
        Self::new_with_config(bounds, Config::from(settings))
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn bounds(&self) -> Aabb {
        self.node(NodeId::ROOT).bounds
    }

    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef::new(self, NodeId::ROOT)
    }

    /// Look a node up by id. `None` for ids that were never handed out or
    /// whose node has since been collapsed.
    pub fn node_ref(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        let node = self.nodes.get(id.index())?;
        // Released slots drop their parent link; only the root has none.
        if id != NodeId::ROOT && node.parent.is_none() {
            return None;
        }
        Some(NodeRef::new(self, id))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn count(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Live nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Number of levels below the root currently in use.
    pub fn height(&self) -> u32 {
        self.nodes()
            .map(|node| node.depth())
            .max()
            .unwrap_or_default()
    }
}
