use crate::aabb::Aabb;
use std::hash::{Hash, Hasher};

/// Anything that can report the box it occupies.
///
/// Indices only ever ask for the box; they never look at the rest of the entity.
pub trait Bounded {
    fn aabb(&self) -> Aabb;
}

impl Bounded for Aabb {
    fn aabb(&self) -> Aabb {
        *self
    }
}

impl<B: Bounded + ?Sized> Bounded for &B {
    fn aabb(&self) -> Aabb {
        (**self).aabb()
    }
}

/// Plain handle: a caller-side id plus the box it was indexed with.
///
/// Two handles are the same entity when their ids match, whatever their boxes.
#[derive(Debug, Copy, Clone)]
pub struct Entity {
    pub id: u32,
    pub aabb: Aabb,
}

impl Entity {
    pub fn new(id: u32, aabb: Aabb) -> Self {
        Self { id, aabb }
    }

    /// Same id, new box. The old handle stays valid for removal.
    pub fn moved_to(&self, aabb: Aabb) -> Self {
        Self { id: self.id, aabb }
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Entity {}

impl Hash for Entity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Bounded for Entity {
    fn aabb(&self) -> Aabb {
        self.aabb
    }
}
