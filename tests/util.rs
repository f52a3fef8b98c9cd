#![allow(dead_code)]
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use witness_sieve::prelude::*;

/// Points on the real line.
pub fn line(xs: &[f64]) -> Vec<Vec<f64>> {
    xs.iter().map(|&x| vec![x]).collect()
}

/// `n` seeded uniform points in `[-1, 1]^dim`.
pub fn random_cloud(seed: u64, n: usize, dim: usize) -> Vec<Vec<f64>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect())
        .collect()
}

/// Build into a fresh `SimplexTree`, panicking on precondition errors.
pub fn build(
    wc: &EuclideanWitnessComplex,
    max_alpha_square: f64,
    limit_dimension: Option<i64>,
) -> (SimplexTree, ConstructionReport) {
    let mut st = SimplexTree::new();
    let report = wc
        .create_complex(&mut st, max_alpha_square, limit_dimension)
        .expect("construction must succeed");
    (st, report)
}

/// Vertex lists of all simplices, sorted.
pub fn vertex_sets(st: &SimplexTree) -> Vec<Vec<LandmarkId>> {
    let mut out: Vec<_> = st.iter().map(|s| s.vertices().to_vec()).collect();
    out.sort();
    out
}
