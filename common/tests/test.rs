use common::aabb::*;
use common::{Bounded, DVec2, Entity, PartitionSettings};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn aabb(cx: f64, cy: f64, ex: f64, ey: f64) -> Aabb {
    Aabb::new(DVec2::new(cx, cy), DVec2::new(ex, ey))
}

#[test]
fn test_new_and_getters() {
    let b = aabb(2.0, 3.0, 4.0, 6.0);
    assert_eq!(b.center(), DVec2::new(2.0, 3.0));
    assert_eq!(b.extents(), DVec2::new(4.0, 6.0));
    assert_eq!(b.min(), DVec2::new(-2.0, -3.0));
    assert_eq!(b.max(), DVec2::new(6.0, 9.0));
    assert_eq!(b.size(), DVec2::new(8.0, 12.0));
}

#[test]
fn test_negative_extents_are_normalized() {
    let b = aabb(0.0, 0.0, -3.0, -1.0);
    assert_eq!(b.extents(), DVec2::new(3.0, 1.0));
}

#[test]
fn test_from_min_max() {
    let b = Aabb::from_min_max(DVec2::new(10.0, -2.0), DVec2::new(0.0, 2.0));
    assert_eq!(b.center(), DVec2::new(5.0, 0.0));
    assert_eq!(b.extents(), DVec2::new(5.0, 2.0));
}

#[test]
fn test_from_point() {
    let b = Aabb::from_point(DVec2::new(7.0, 8.0));
    assert_eq!(b.min(), b.max());
    assert!(b.contains_point(DVec2::new(7.0, 8.0)));
}

#[test]
fn test_enclosing_includes_edges() {
    let outer = aabb(0.0, 0.0, 10.0, 10.0);
    assert!(is_enclosing(&outer, &outer));
    assert!(is_enclosing(&outer, &aabb(5.0, 5.0, 5.0, 5.0)));
    assert!(!is_enclosing(&outer, &aabb(5.0, 5.0, 5.1, 5.0)));
    assert!(!is_enclosing(&aabb(5.0, 5.0, 5.0, 5.0), &outer));
}

#[test]
fn test_overlapping_is_symmetric() {
    let a = aabb(0.0, 0.0, 2.0, 2.0);
    let b = aabb(3.0, 3.0, 2.0, 2.0);
    assert!(is_overlapping(&a, &b));
    assert!(is_overlapping(&b, &a));
}

#[test]
fn test_overlapping_box_below_left() {
    // A box entirely to the lower left used to be reported as overlapping.
    let node = aabb(0.0, 0.0, 1.0, 1.0);
    let target = aabb(-10.0, -10.0, 1.0, 1.0);
    assert!(!is_overlapping(&node, &target));
    assert!(!is_overlapping(&target, &node));
    assert!(is_disjoint(&node, &target));
}

#[test]
fn test_touching_edges_are_disjoint() {
    let a = aabb(0.0, 0.0, 1.0, 1.0);
    let b = aabb(2.0, 0.0, 1.0, 1.0);
    assert!(!a.overlaps(&b));
    assert!(a.is_disjoint_from(&b));
}

#[test]
fn test_containing_box_overlaps() {
    let big = aabb(0.0, 0.0, 100.0, 100.0);
    let small = aabb(10.0, -10.0, 1.0, 1.0);
    assert!(big.overlaps(&small));
    assert!(small.overlaps(&big));
    assert!(big.encloses(&small));
}

#[test]
fn test_quadrants() {
    let b = aabb(0.0, 0.0, 50.0, 50.0);
    let [ne, nw, sw, se] = b.quadrants();
    assert_eq!(ne, aabb(25.0, 25.0, 25.0, 25.0));
    assert_eq!(nw, aabb(-25.0, 25.0, 25.0, 25.0));
    assert_eq!(sw, aabb(-25.0, -25.0, 25.0, 25.0));
    assert_eq!(se, aabb(25.0, -25.0, 25.0, 25.0));
    for q in b.quadrants() {
        assert!(b.encloses(&q));
    }
}

#[test]
fn test_random_enclosed_stays_inside() {
    let bounds = aabb(2.0, 3.0, 6.0, 8.0);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..100 {
        let b = bounds.random_enclosed(DVec2::new(2.0, 2.0), &mut rng);
        assert!(bounds.encloses(&b));
    }
}

#[test]
fn test_random_enclosed_extents_clamped_to_bounds() {
    let bounds = aabb(0.0, 0.0, 1.0, 1.0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(7);
    let b = bounds.random_enclosed(DVec2::new(10.0, 10.0), &mut rng);
    assert!(b.extents().x <= 1.0 && b.extents().y <= 1.0);
    assert!(bounds.encloses(&b));
}

#[test]
fn test_random_inside_center_within_bounds() {
    let bounds = aabb(-5.0, 5.0, 3.0, 3.0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(99);
    for _ in 0..50 {
        let b = bounds.random_inside(DVec2::new(4.0, 4.0), &mut rng);
        assert!(bounds.contains_point(b.center()));
    }
}

#[test]
fn test_entity_identity_is_the_id() {
    let a = Entity::new(1, aabb(0.0, 0.0, 1.0, 1.0));
    let moved = a.moved_to(aabb(9.0, 9.0, 1.0, 1.0));
    assert_eq!(a, moved);
    assert_ne!(a.aabb(), moved.aabb());
    assert_ne!(a, Entity::new(2, a.aabb));
}

#[test]
fn test_default_settings() {
    let settings = PartitionSettings::default();
    assert_eq!(settings.max_items_per_node, 10);
    assert_eq!(settings.max_tree_depth, 5);
    assert_eq!(settings.cell_size, 10.0);
    assert!(settings.rebuild_every_tick);
}

fn arb_aabb() -> impl Strategy<Value = Aabb> {
    (-100.0..100.0f64, -100.0..100.0f64, 0.0..20.0f64, 0.0..20.0f64)
        .prop_map(|(cx, cy, ex, ey)| aabb(cx, cy, ex, ey))
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in arb_aabb(), b in arb_aabb()) {
        prop_assert_eq!(is_overlapping(&a, &b), is_overlapping(&b, &a));
        prop_assert_eq!(is_disjoint(&a, &b), !is_overlapping(&a, &b));
    }

    #[test]
    fn enclosed_non_empty_box_overlaps(a in arb_aabb(), b in arb_aabb()) {
        let has_area = b.extents().x > 0.0 && b.extents().y > 0.0;
        if is_enclosing(&a, &b) && has_area {
            prop_assert!(is_overlapping(&a, &b));
        }
    }
}
