mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use netgrow::prelude::{DegreeDistribution, GrowthEngine, GrowthParams};

const NODE_COUNTS: [usize; 4] = [100, 500, 1000, 2000];

fn growth_create_net_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth/create_net");

    for &n in &NODE_COUNTS {
        let engine = GrowthEngine::new(GrowthParams::new(n), DegreeDistribution::road_like())
            .expect("valid parameters");
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            let mut rng = common::seeded(0xA11CE ^ n as u64);
            b.iter(|| {
                let report = engine.create_net(&mut rng).expect("growth run");
                black_box(report.network.node_count());
            });
        });
    }

    group.finish();
}

fn growth_connectivity_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth/connectivity");
    let n = 1000;

    for &connectivity in &[0.0f32, 0.5, 0.95] {
        let params = GrowthParams::new(n).with_connectivity(connectivity);
        let engine =
            GrowthEngine::new(params, DegreeDistribution::road_like()).expect("valid parameters");
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(
            BenchmarkId::from_parameter(connectivity),
            &connectivity,
            |b, _| {
                let mut rng = common::seeded(0xBEEF);
                b.iter(|| {
                    let report = engine.create_net(&mut rng).expect("growth run");
                    black_box(report.network.link_count());
                });
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = growth_create_net_benches, growth_connectivity_benches
}
criterion_main!(benches);
