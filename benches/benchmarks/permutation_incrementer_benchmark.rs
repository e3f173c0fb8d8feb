use criterion::{black_box, criterion_group, Criterion};
use nextperm::permutation_incrementer::PermutationIncrementer;

fn exhaust_permutations(count: usize) {
    let mut permutation_incrementer = PermutationIncrementer::from_count(count);
    while let Some(permutation) = permutation_incrementer.try_get_next_permutation() {
        black_box(permutation);
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("exhaust_permutations: 8", |b| b.iter(|| exhaust_permutations(black_box(8))));
}

criterion_group!(benches, criterion_benchmark);
