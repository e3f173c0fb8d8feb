pub mod permutation_incrementer;
#[macro_use] extern crate log;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PermutationIncrementerError {
    #[error("Removal of permutations is not supported.")]
    RemoveNotSupported
}

pub(crate) fn get_factorial(n: u64) -> u64 {
    let mut permutations_total: u64 = 1;
    // calculate f(n) = n * (n - 1) * ... * 2 * 1
    for factor in 2..=n {
        permutations_total = permutations_total * factor;
    }
    return permutations_total;
}
