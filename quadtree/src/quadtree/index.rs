use super::Quadtree;
use common::{Aabb, Bounded, SpatialIndex};

impl<T> SpatialIndex<T> for Quadtree<T>
where
    T: Bounded + PartialEq + Clone,
{
    fn insert(&mut self, item: T) {
        Quadtree::insert(self, item);
    }

    fn remove(&mut self, item: &T) -> bool {
        Quadtree::remove(self, item)
    }

    fn query(&self, region: &Aabb) -> Vec<T> {
        let mut items = Vec::new();
        self.for_each_in_area(region, |item| items.push(item.clone()));
        items
    }

    fn len(&self) -> usize {
        Quadtree::len(self)
    }

    fn clear(&mut self) {
        Quadtree::clear(self);
    }

    fn rebuild<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        Quadtree::rebuild(self, items);
    }
}
