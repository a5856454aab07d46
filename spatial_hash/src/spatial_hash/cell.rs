use common::DVec2;
use std::fmt;

/// Integer coordinates of one grid cell. Cell `(x, y)` covers
/// `[x * size.x, (x + 1) * size.x)` horizontally, and likewise vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub x: i64,
    pub y: i64,
}

impl CellKey {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Lower-left corner of the cell in world space.
    pub fn origin(&self, cell_size: DVec2) -> DVec2 {
        DVec2::new(self.x as f64 * cell_size.x, self.y as f64 * cell_size.y)
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Inclusive rectangle of cell keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub min: CellKey,
    pub max: CellKey,
}

impl CellRange {
    /// Range with no keys at all.
    pub const EMPTY: CellRange = CellRange {
        min: CellKey::new(0, 0),
        max: CellKey::new(-1, -1),
    };

    pub fn contains(&self, key: CellKey) -> bool {
        (self.min.x..=self.max.x).contains(&key.x) && (self.min.y..=self.max.y).contains(&key.y)
    }

    /// Number of keys, saturating at `usize::MAX` for huge ranges.
    pub fn len(&self) -> usize {
        let width = span(self.min.x, self.max.x);
        let height = span(self.min.y, self.max.y);
        usize::try_from(width.saturating_mul(height)).unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every key in the range, row by row from the bottom.
    pub fn keys(&self) -> impl Iterator<Item = CellKey> {
        let CellRange { min, max } = *self;
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| CellKey::new(x, y)))
    }
}

fn span(min: i64, max: i64) -> u64 {
    if max < min {
        return 0;
    }
    max.abs_diff(min).saturating_add(1)
}

/// Bucket work done by [`super::SpatialHash::move_item`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CellDelta {
    pub removed: usize,
    pub inserted: usize,
}

impl CellDelta {
    pub fn is_empty(&self) -> bool {
        self.removed == 0 && self.inserted == 0
    }
}
