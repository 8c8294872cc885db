mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use netgrow::prelude::DegreeDistribution;
use rand::Rng;

fn make_distribution(entries: usize, seed: u64) -> DegreeDistribution {
    let mut rng = common::seeded(seed);
    DegreeDistribution::from_entries((0..entries).map(|count| (count, rng.random::<f32>() * 10.0)))
        .expect("weights are non-negative")
}

fn distribution_sample_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribution/sample");

    for &n in &[4usize, 16, 256, 4096] {
        let dist = make_distribution(n, 0xC0FFEE);
        let sampler = dist.sampler().expect("distribution has positive weights");
        group.throughput(common::elements_throughput(1));

        group.bench_with_input(BenchmarkId::new("prebuilt", n), &n, |b, _| {
            let mut rng = common::seeded(0xDEADBEEF);
            b.iter(|| black_box(sampler.sample(&mut rng)));
        });

        group.bench_with_input(BenchmarkId::new("rebuild_each_draw", n), &n, |b, _| {
            let mut rng = common::seeded(0xDEADBEEF);
            b.iter(|| black_box(dist.sample(&mut rng).ok()));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = distribution_sample_benches
}
criterion_main!(benches);
