use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadtreeError {
    #[error("max items per node must be at least 1 (got {max_items})")]
    InvalidMaxItems { max_items: u32 },
    #[error("max depth must be at least 1 so the root can split (got {max_depth})")]
    InvalidMaxDepth { max_depth: u32 },
    #[error(
        "quadtree bounds must be finite with a non-zero area (center: ({center_x}, {center_y}), extents: ({extents_x}, {extents_y}))"
    )]
    InvalidBounds {
        center_x: f64,
        center_y: f64,
        extents_x: f64,
        extents_y: f64,
    },
    #[error("quadtree invariant violated at {node}: {reason}")]
    InvariantViolation { node: String, reason: String },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
