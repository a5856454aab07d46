pub mod error;
pub mod spatial_hash;

pub use error::{SpatialHashError, SpatialHashResult};
pub use spatial_hash::{CellDelta, CellKey, CellRange, SpatialHash};
