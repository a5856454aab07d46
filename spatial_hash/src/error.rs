use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpatialHashError {
    #[error("cell size must be finite and positive on both axes (got ({x}, {y}))")]
    InvalidCellSize { x: f64, y: f64 },
}

pub type SpatialHashResult<T> = Result<T, SpatialHashError>;
