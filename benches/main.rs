use criterion::criterion_main;

mod benchmarks;

criterion_main! {
    benchmarks::permutation_incrementer_benchmark::benches
}
