/// Tunables shared by both indices, handed over by whatever loads the
/// simulation settings. Nothing here is read from global state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PartitionSettings {
    /// Items a quadtree node holds before it tries to split.
    pub max_items_per_node: u32,
    /// Deepest level a quadtree may reach; the root is level 0.
    pub max_tree_depth: u32,
    /// Edge length of a spatial hash cell.
    pub cell_size: f64,
    /// Rebuild the active index from scratch every tick instead of updating it.
    pub rebuild_every_tick: bool,
}

impl Default for PartitionSettings {
    fn default() -> Self {
        PartitionSettings {
            max_items_per_node: 10,
            max_tree_depth: 5,
            cell_size: 10.0,
            rebuild_every_tick: true,
        }
    }
}
