use crate::aabb::Aabb;

/// Contract shared by the broad-phase indices so a simulation can swap one
/// for another without touching its update loop.
///
/// The index never decides when to rebuild; the caller picks between
/// [`SpatialIndex::rebuild`] and per-entity [`SpatialIndex::relocate`] each tick.
pub trait SpatialIndex<T> {
    fn insert(&mut self, item: T);

    /// Returns `false` if the item was not indexed (stale removals are fine).
    fn remove(&mut self, item: &T) -> bool;

    /// Replace `old` by `new`, where `new` is usually the same entity with a new box.
    fn relocate(&mut self, old: &T, new: T) {
        self.remove(old);
        self.insert(new);
    }

    /// Broad-phase candidates for `region`, without duplicates.
    fn query(&self, region: &Aabb) -> Vec<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    fn rebuild<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        self.clear();
        for item in items {
            self.insert(item);
        }
    }
}
