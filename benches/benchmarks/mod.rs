pub mod permutation_incrementer_benchmark;
