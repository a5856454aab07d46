use common::{Aabb, DVec2, Entity};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::Quadtree;
use rand::prelude::*;

const ENTITIES: u32 = 1000;

fn world() -> Aabb {
    Aabb::new(DVec2::ZERO, DVec2::new(500.0, 500.0))
}

fn random_entities(rng: &mut StdRng, count: u32) -> Vec<Entity> {
    (0..count)
        .map(|id| Entity::new(id, world().random_enclosed(DVec2::new(5.0, 5.0), rng)))
        .collect()
}

fn filled_tree(entities: &[Entity]) -> Quadtree<Entity> {
    let mut quadtree = Quadtree::new(world(), 8, 6).unwrap();
    for entity in entities {
        quadtree.insert(*entity);
    }
    quadtree
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let entities = random_entities(&mut rng, ENTITIES);

    c.bench_function("quadtree_insert", |b| {
        b.iter(|| black_box(filled_tree(&entities)))
    });
}

fn remove_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let entities = random_entities(&mut rng, ENTITIES);

    c.bench_function("quadtree_remove", |b| {
        b.iter_batched(
            || filled_tree(&entities),
            |mut quadtree| {
                for entity in &entities {
                    quadtree.remove(black_box(entity));
                }
                quadtree
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn query_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let entities = random_entities(&mut rng, ENTITIES);
    let quadtree = filled_tree(&entities);

    c.bench_function("quadtree_get_items_by_area", |b| {
        b.iter(|| {
            let region = world().random_enclosed(DVec2::new(40.0, 40.0), &mut rng);
            black_box(quadtree.get_items_by_area(&region).len())
        })
    });
}

// One simulation tick: every entity drifts a little, then the index is
// either rebuilt or updated entity by entity.
fn tick_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let entities = random_entities(&mut rng, ENTITIES);
    let moved: Vec<Entity> = entities
        .iter()
        .map(|entity| {
            let offset = DVec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            entity.moved_to(Aabb::new(entity.aabb.center() + offset, entity.aabb.extents()))
        })
        .collect();

    c.bench_function("quadtree_tick_rebuild", |b| {
        b.iter_batched(
            || filled_tree(&entities),
            |mut quadtree| {
                quadtree.rebuild(moved.iter().copied());
                quadtree
            },
            criterion::BatchSize::SmallInput,
        )
    });

    c.bench_function("quadtree_tick_incremental", |b| {
        b.iter_batched(
            || filled_tree(&entities),
            |mut quadtree| {
                for (old, new) in entities.iter().zip(&moved) {
                    quadtree.remove(old);
                    quadtree.insert(*new);
                }
                quadtree
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    insert_benchmark,
    remove_benchmark,
    query_benchmark,
    tick_benchmark
);
criterion_main!(benches);
