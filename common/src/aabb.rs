use glam::DVec2;
use rand::Rng;
use std::fmt;

/// Axis-aligned bounding box stored as a center and half extents.
///
/// Extents are never negative. A moved entity gets a new `Aabb`; values
/// already handed to an index are never mutated in place.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    center: DVec2,
    extents: DVec2,
}

impl Aabb {
    pub fn new(center: DVec2, extents: DVec2) -> Self {
        Self {
            center,
            extents: extents.abs(),
        }
    }

    pub fn from_min_max(min: DVec2, max: DVec2) -> Self {
        let lo = min.min(max);
        let hi = min.max(max);
        Self {
            center: (lo + hi) * 0.5,
            extents: (hi - lo) * 0.5,
        }
    }

    /// A zero-sized box sitting on `point`.
    pub fn from_point(point: DVec2) -> Self {
        Self {
            center: point,
            extents: DVec2::ZERO,
        }
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn extents(&self) -> DVec2 {
        self.extents
    }

    pub fn min(&self) -> DVec2 {
        self.center - self.extents
    }

    pub fn max(&self) -> DVec2 {
        self.center + self.extents
    }

    pub fn size(&self) -> DVec2 {
        self.extents * 2.0
    }

    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.extents.is_finite()
    }

    pub fn contains_point(&self, point: DVec2) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// True if `inner` lies wholly inside `self`, edges included.
    pub fn encloses(&self, inner: &Aabb) -> bool {
        is_enclosing(self, inner)
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        is_overlapping(self, other)
    }

    pub fn is_disjoint_from(&self, other: &Aabb) -> bool {
        is_disjoint(self, other)
    }

    /// The four boxes obtained by cutting `self` along both center lines,
    /// in `[NE, NW, SW, SE]` order (x grows east, y grows north).
    pub fn quadrants(&self) -> [Aabb; 4] {
        let half = self.extents * 0.5;
        let c = self.center;
        [
            Aabb::new(DVec2::new(c.x + half.x, c.y + half.y), half),
            Aabb::new(DVec2::new(c.x - half.x, c.y + half.y), half),
            Aabb::new(DVec2::new(c.x - half.x, c.y - half.y), half),
            Aabb::new(DVec2::new(c.x + half.x, c.y - half.y), half),
        ]
    }

    /// Random box of at most `max_extents` half size whose center lies inside `self`.
    pub fn random_inside<R: Rng>(&self, max_extents: DVec2, rng: &mut R) -> Aabb {
        let min = self.min();
        let max = self.max();
        let center = DVec2::new(safe_range(rng, min.x, max.x), safe_range(rng, min.y, max.y));
        let extents = DVec2::new(
            safe_range(rng, 0.0, max_extents.x.abs()),
            safe_range(rng, 0.0, max_extents.y.abs()),
        );
        Aabb::new(center, extents)
    }

    /// Like [`Aabb::random_inside`] but the whole generated box stays enclosed by `self`.
    pub fn random_enclosed<R: Rng>(&self, max_extents: DVec2, rng: &mut R) -> Aabb {
        let extents = DVec2::new(
            safe_range(rng, 0.0, max_extents.x.abs().min(self.extents.x)),
            safe_range(rng, 0.0, max_extents.y.abs().min(self.extents.y)),
        );
        let min = self.min() + extents;
        let max = self.max() - extents;
        let center = DVec2::new(safe_range(rng, min.x, max.x), safe_range(rng, min.y, max.y));
        let candidate = Aabb::new(center, extents);
        // Rounding can push an edge one ulp past the bounds.
        if self.encloses(&candidate) {
            candidate
        } else {
            Aabb::from_point(center)
        }
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self {
            center: DVec2::ZERO,
            extents: DVec2::ZERO,
        }
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "center=({}, {}) extents=({}, {})",
            self.center.x, self.center.y, self.extents.x, self.extents.y
        )
    }
}

fn safe_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}

// Check that inner is fully contained in outer
pub fn is_enclosing(outer: &Aabb, inner: &Aabb) -> bool {
    let (outer_min, outer_max) = (outer.min(), outer.max());
    let (inner_min, inner_max) = (inner.min(), inner.max());
    inner_min.x >= outer_min.x
        && inner_max.x <= outer_max.x
        && inner_min.y >= outer_min.y
        && inner_max.y <= outer_max.y
}

pub fn is_overlapping(a: &Aabb, b: &Aabb) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}

pub fn is_disjoint(a: &Aabb, b: &Aabb) -> bool {
    !is_overlapping(a, b)
}
