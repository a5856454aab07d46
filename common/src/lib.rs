pub mod aabb;
pub mod entity;
pub mod index;
pub mod settings;

pub use aabb::{is_disjoint, is_enclosing, is_overlapping, Aabb};
pub use entity::{Bounded, Entity};
pub use glam::DVec2;
pub use index::SpatialIndex;
pub use settings::PartitionSettings;
