mod cell;
mod index;

pub use cell::{CellDelta, CellKey, CellRange};

use crate::error::{SpatialHashError, SpatialHashResult};
use common::{Aabb, DVec2, PartitionSettings};
use fxhash::{FxHashMap, FxHashSet};
use std::fmt;
use std::hash::Hash;
use tracing::{debug, trace};

/// Uniform grid of buckets keyed by cell. A handle is stored once in every
/// cell its box touches, so lookups only have to visit the covered cells.
///
/// Handles are small caller-owned values, usually ids. The hash never looks
/// inside them beyond `Eq` and `Hash`.
pub struct SpatialHash<H> {
    cell_size: DVec2,
    buckets: FxHashMap<CellKey, Vec<H>>,
    // Number of buckets each handle sits in.
    occupancy: FxHashMap<H, usize>,
}

impl<H> SpatialHash<H>
where
    H: Copy + Eq + Hash,
{
    pub fn new(cell_size: f64) -> SpatialHashResult<Self> {
        Self::with_cell_size(DVec2::splat(cell_size))
    }

    pub fn with_cell_size(cell_size: DVec2) -> SpatialHashResult<Self> {
        if !cell_size.is_finite() || cell_size.x <= 0.0 || cell_size.y <= 0.0 {
            let err = SpatialHashError::InvalidCellSize {
                x: cell_size.x,
                y: cell_size.y,
            };
            debug!(%err, "rejected spatial hash configuration");
            return Err(err);
        }
        Ok(Self {
            cell_size,
            buckets: FxHashMap::default(),
            occupancy: FxHashMap::default(),
        })
    }

    pub fn from_settings(settings: &PartitionSettings) -> SpatialHashResult<Self> {
        Self::new(settings.cell_size)
    }

    pub fn cell_size(&self) -> DVec2 {
        self.cell_size
    }

    pub fn to_cell_key(&self, point: DVec2) -> CellKey {
        let cell = (point / self.cell_size).floor();
        CellKey::new(cell.x as i64, cell.y as i64)
    }

    /// Cells touched by `aabb`, boundaries included: a box whose edge lies
    /// exactly on a grid line also covers the cell past that line. A box with
    /// a non-finite coordinate covers no cell.
    pub fn cell_range(&self, aabb: &Aabb) -> CellRange {
        if !aabb.is_finite() {
            trace!(%aabb, "non-finite box covers no cell");
            return CellRange::EMPTY;
        }
        CellRange {
            min: self.to_cell_key(aabb.min()),
            max: self.to_cell_key(aabb.max()),
        }
    }

    pub fn to_cell_keys(&self, aabb: &Aabb) -> Vec<CellKey> {
        self.cell_range(aabb).keys().collect()
    }

    /// Add `handle` to every cell `aabb` covers. Returns the number of
    /// buckets it was newly added to.
    pub fn insert(&mut self, aabb: &Aabb, handle: H) -> usize {
        let range = self.cell_range(aabb);
        let inserted = self.insert_keys(range.keys(), handle);
        trace!(cells = range.len(), inserted, "spatial hash insert");
        inserted
    }

    /// Remove `handle` from every cell `aabb` covers. Returns the number of
    /// buckets it was actually found in; a stale box simply misses.
    pub fn remove(&mut self, aabb: &Aabb, handle: &H) -> usize {
        let range = self.cell_range(aabb);
        let removed = self.remove_keys(range.keys(), handle);
        trace!(cells = range.len(), removed, "spatial hash remove");
        removed
    }

    /// Move `handle` from the cells of `old_aabb` to those of `new_aabb`.
    /// Cells covered by both boxes are left alone.
    pub fn move_item(&mut self, old_aabb: &Aabb, new_aabb: &Aabb, handle: H) -> CellDelta {
        let old_range = self.cell_range(old_aabb);
        let new_range = self.cell_range(new_aabb);
        let mut delta = CellDelta::default();
        if old_range == new_range {
            return delta;
        }
        for key in old_range.keys().filter(|key| !new_range.contains(*key)) {
            if self.remove_from_bucket(key, &handle) {
                delta.removed += 1;
            }
        }
        for key in new_range.keys().filter(|key| !old_range.contains(*key)) {
            if self.insert_into_bucket(key, handle) {
                delta.inserted += 1;
            }
        }
        trace!(removed = delta.removed, inserted = delta.inserted, "spatial hash move");
        delta
    }

    /// Same as [`SpatialHash::move_item`] for two handles that compare
    /// equal, but also refreshes the stored copy in the shared cells.
    pub(crate) fn replace_item(
        &mut self,
        old_aabb: &Aabb,
        new_aabb: &Aabb,
        old: &H,
        new: H,
    ) -> CellDelta {
        let old_range = self.cell_range(old_aabb);
        let new_range = self.cell_range(new_aabb);
        if let Some(count) = self.occupancy.remove(old) {
            self.occupancy.insert(new, count);
        }
        let mut delta = CellDelta::default();
        for key in old_range.keys() {
            if new_range.contains(key) {
                if let Some(bucket) = self.buckets.get_mut(&key) {
                    for slot in bucket.iter_mut().filter(|slot| **slot == *old) {
                        *slot = new;
                    }
                }
            } else if self.remove_from_bucket(key, old) {
                delta.removed += 1;
            }
        }
        for key in new_range.keys().filter(|key| !old_range.contains(*key)) {
            if self.insert_into_bucket(key, new) {
                delta.inserted += 1;
            }
        }
        delta
    }

    /// Candidates for `aabb`: the union of the covered buckets, each handle
    /// once, in the order first seen.
    pub fn get_items(&self, aabb: &Aabb) -> Vec<H> {
        let mut seen = FxHashSet::default();
        let mut items = Vec::new();
        for key in self.cell_range(aabb).keys() {
            if let Some(bucket) = self.buckets.get(&key) {
                for handle in bucket {
                    if seen.insert(*handle) {
                        items.push(*handle);
                    }
                }
            }
        }
        items
    }

    pub fn insert_point(&mut self, point: DVec2, handle: H) -> bool {
        let key = self.to_cell_key(point);
        self.insert_into_bucket(key, handle)
    }

    pub fn remove_point(&mut self, point: DVec2, handle: &H) -> bool {
        let key = self.to_cell_key(point);
        self.remove_from_bucket(key, handle)
    }

    /// Contents of the cell holding `point`.
    pub fn get_items_at(&self, point: DVec2) -> &[H] {
        self.bucket(self.to_cell_key(point))
    }

    /// Whether anything is stored in the cell holding `point`.
    pub fn contains_point(&self, point: DVec2) -> bool {
        !self.get_items_at(point).is_empty()
    }

    pub fn insert_keys<I>(&mut self, keys: I, handle: H) -> usize
    where
        I: IntoIterator<Item = CellKey>,
    {
        keys.into_iter()
            .filter(|key| self.insert_into_bucket(*key, handle))
            .count()
    }

    pub fn remove_keys<I>(&mut self, keys: I, handle: &H) -> usize
    where
        I: IntoIterator<Item = CellKey>,
    {
        keys.into_iter()
            .filter(|key| self.remove_from_bucket(*key, handle))
            .count()
    }

    pub fn bucket(&self, key: CellKey) -> &[H] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Keys of the non-empty buckets, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = CellKey> + '_ {
        self.buckets.keys().copied()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Sum of all bucket lengths; a handle spanning several cells counts
    /// once per cell.
    pub fn membership_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Number of distinct handles stored.
    pub fn count(&self) -> usize {
        self.occupancy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    pub fn contains(&self, handle: &H) -> bool {
        self.occupancy.contains_key(handle)
    }

    pub fn clear(&mut self) {
        debug!(
            buckets = self.buckets.len(),
            handles = self.occupancy.len(),
            "cleared spatial hash"
        );
        self.buckets.clear();
        self.occupancy.clear();
    }

    fn insert_into_bucket(&mut self, key: CellKey, handle: H) -> bool {
        let bucket = self.buckets.entry(key).or_default();
        if bucket.contains(&handle) {
            return false;
        }
        bucket.push(handle);
        *self.occupancy.entry(handle).or_insert(0) += 1;
        true
    }

    fn remove_from_bucket(&mut self, key: CellKey, handle: &H) -> bool {
        let Some(bucket) = self.buckets.get_mut(&key) else {
            return false;
        };
        let Some(position) = bucket.iter().position(|stored| stored == handle) else {
            return false;
        };
        bucket.swap_remove(position);
        if bucket.is_empty() {
            self.buckets.remove(&key);
        }
        if let Some(count) = self.occupancy.get_mut(handle) {
            *count -= 1;
            if *count == 0 {
                self.occupancy.remove(handle);
            }
        }
        true
    }
}

/// One line per non-empty bucket, sorted by key.
impl<H> fmt::Display for SpatialHash<H>
where
    H: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&CellKey> = self.buckets.keys().collect();
        keys.sort();
        for key in keys {
            writeln!(f, "{} {:?}", key, self.buckets[key])?;
        }
        Ok(())
    }
}

impl<H> fmt::Debug for SpatialHash<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpatialHash")
            .field("cell_size", &self.cell_size)
            .field("buckets", &self.buckets.len())
            .field("handles", &self.occupancy.len())
            .finish()
    }
}
