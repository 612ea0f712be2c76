use criterion::{criterion_group, criterion_main, Criterion};
use gearforge::catalog::{Item, SlotCatalog};
use gearforge::config::Constraints;
use gearforge::search::monitor::WorkerCounter;
use gearforge::search::{Evaluator, IndexSpace, NoopObserver, SharedBest};
use std::hint::black_box;

fn setup_catalog(per_slot: usize) -> SlotCatalog {
    let mut rng = fastrand::Rng::with_seed(0x6ea5);
    let slots = (0..12)
        .map(|s| {
            (0..per_slot)
                .map(|i| Item {
                    name: format!("bench-{}-{}", s, i),
                    stamina: rng.i32(40..160),
                    hit_rating: rng.i32(0..50),
                    expertise_rating: rng.i32(0..20),
                    dps: rng.f64() * 40.0,
                    cost: rng.i32(0..4000),
                    slot_id: 10 + s as i64,
                    uuid: rng.i64(0..10_000),
                })
                .collect()
        })
        .collect();
    SlotCatalog::new(slots).expect("Failed to build catalog")
}

fn criterion_benchmark(c: &mut Criterion) {
    let catalog = setup_catalog(4);
    let space = IndexSpace::new(&catalog.slot_sizes()).expect("Failed to build index space");
    let evaluator =
        Evaluator::new(&catalog, &space, Constraints::default()).expect("Failed to build evaluator");

    let choices = space.decode(space.total() / 2);
    c.bench_function("evaluate (12 slots)", |b| {
        b.iter(|| evaluator.evaluate(black_box(&choices)))
    });

    c.bench_function("decode", |b| b.iter(|| space.decode(black_box(1_234_567))));

    // 4^12 is ~16.7M; a 64k slice keeps iterations short.
    c.bench_function("scan 65536", |b| {
        b.iter(|| {
            let best = SharedBest::new();
            let counter = WorkerCounter::default();
            evaluator.scan(0, black_box(0..65_536), &best, &counter, &NoopObserver)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
