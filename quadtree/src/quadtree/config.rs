use crate::error::{QuadtreeError, QuadtreeResult};
use common::PartitionSettings;

/// Split policy of a single tree. Fixed at construction; two trees with
/// different policies can live side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub max_items_per_node: u32,
    pub max_depth: u32,
}

impl Config {
    pub fn new(max_items_per_node: u32, max_depth: u32) -> Self {
        Config {
            max_items_per_node,
            max_depth,
        }
    }

    pub fn validate(&self) -> QuadtreeResult<()> {
        if self.max_items_per_node == 0 {
            return Err(QuadtreeError::InvalidMaxItems {
                max_items: self.max_items_per_node,
            });
        }
        // The root sits at depth 0, so a max depth of 0 could never split.
        if self.max_depth == 0 {
            return Err(QuadtreeError::InvalidMaxDepth {
                max_depth: self.max_depth,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_items_per_node: 10,
            max_depth: 5,
        }
    }
}

impl From<&PartitionSettings> for Config {
    fn from(settings: &PartitionSettings) -> Self {
        Config {
            max_items_per_node: settings.max_items_per_node,
            max_depth: settings.max_tree_depth,
        }
    }
}
