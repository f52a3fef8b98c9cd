use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use witness_sieve::prelude::*;

fn cloud(seed: u64, n: usize, dim: usize) -> Vec<Vec<f64>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..dim).map(|_| rng.gen_range(0.0..1.0)).collect())
        .collect()
}

fn bench_create_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_complex");

    for &landmarks in &[50usize, 200usize] {
        let points = cloud(1, landmarks, 3);
        let witnesses = cloud(2, landmarks * 10, 3);
        let kd = EuclideanWitnessComplex::new(points.clone(), witnesses.clone())
            .expect("kd-tree over landmarks");
        let scan = ScanWitnessComplex::new(points, witnesses).expect("scan over landmarks");

        group.bench_with_input(BenchmarkId::new("kd_tree", landmarks), &landmarks, |b, _| {
            b.iter(|| {
                let mut st = SimplexTree::new();
                let report = kd.create_complex(&mut st, 0.01, Some(3)).expect("build");
                black_box((st, report));
            });
        });

        group.bench_with_input(
            BenchmarkId::new("sorted_scan", landmarks),
            &landmarks,
            |b, _| {
                b.iter(|| {
                    let mut st = SimplexTree::new();
                    let report = scan.create_complex(&mut st, 0.01, Some(3)).expect("build");
                    black_box((st, report));
                });
            },
        );
    }

    group.finish();
}

fn bench_nearest_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_landmarks");
    let points = cloud(3, 1000, 3);
    let tree = KdTree::new(points).expect("kd-tree");
    let query = vec![0.5, 0.5, 0.5];

    for &take in &[1usize, 10, 100] {
        group.bench_with_input(BenchmarkId::new("kd_tree_take", take), &take, |b, &take| {
            b.iter(|| {
                let sum: f64 = tree.query(&query).take(take).map(|l| l.distance2).sum();
                black_box(sum);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_create_complex, bench_nearest_queries);
criterion_main!(benches);
