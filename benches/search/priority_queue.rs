use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use route_core::priority_queue::PriorityQueue;

criterion_group!(benches, push_pop);
criterion_main!(benches);

fn push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_queue");
    for size in [1_000, 10_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let distances: Vec<f64> = (0..size).map(|_| rng.gen_range(0.0..10_000.0)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &distances, |b, d| {
            b.iter(|| {
                let mut queue = PriorityQueue::with_capacity(d.len());
                for (node, distance) in d.iter().enumerate() {
                    queue.insert(*distance, node as i64);
                }
                while let Some(item) = queue.pop() {
                    black_box(item);
                }
            });
        });
    }
    group.finish();
}
