use super::SpatialHash;
use common::{Aabb, Bounded, SpatialIndex};
use std::hash::Hash;

impl<T> SpatialIndex<T> for SpatialHash<T>
where
    T: Bounded + Copy + Eq + Hash,
{
    fn insert(&mut self, item: T) {
        SpatialHash::insert(self, &item.aabb(), item);
    }

    fn remove(&mut self, item: &T) -> bool {
        SpatialHash::remove(self, &item.aabb(), item) > 0
    }

    fn relocate(&mut self, old: &T, new: T) {
        // An absent handle has no shared cells to refresh; index it afresh.
        if *old == new && self.contains(old) {
            self.replace_item(&old.aabb(), &new.aabb(), old, new);
        } else {
            SpatialHash::remove(self, &old.aabb(), old);
            SpatialHash::insert(self, &new.aabb(), new);
        }
    }

    fn query(&self, region: &Aabb) -> Vec<T> {
        self.get_items(region)
    }

    fn len(&self) -> usize {
        self.count()
    }

    fn clear(&mut self) {
        SpatialHash::clear(self);
    }
}
