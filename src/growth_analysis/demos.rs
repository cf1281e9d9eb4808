//! Toy algorithms for each [ComplexityClass], counting the operations they actually perform.
//! None of them is timed: their counts are meant to be confronted with [ComplexityClass::operations()].

use num_bigint::BigUint;
use num_traits::One;
use crate::growth_analysis::{
    growth::compute_exponential,
    types::ComplexityClass,
};


/// O(1) -- technically a polynomial of degree 0: accessing an index costs the same regardless of the input size
pub fn constant_time_demo<T>(data: &[T]) -> Option<&T> {
    data.first()
}

/// O(n) -- doubling the input size roughly doubles the work
pub fn linear_time_demo<T>(data: &[T]) -> u64 {
    let mut count = 0;
    for _item in data {
        count += 1;
    }
    count
}

/// O(n^2) -- nested loops, as when checking all pairs (or in Bubble Sort).
/// Doubling the input size quadruples the work
pub fn quadratic_time_demo<T>(data: &[T]) -> u64 {
    let mut iterations = 0;
    for _i in data {
        for _j in data {
            iterations += 1;
        }
    }
    iterations
}

/// O(n^3) -- three nested loops, as in the schoolbook matrix multiplication
pub fn cubic_time_demo<T>(data: &[T]) -> u64 {
    let mut iterations = 0;
    for _i in data {
        for _j in data {
            for _k in data {
                iterations += 1;
            }
        }
    }
    iterations
}

/// O(2^n) -- NOT polynomial: the work doubles with every single increment of `n`.\
/// Only the theoretical count is returned -- no loop would ever finish for a non-trivial `n`
pub fn exponential_time_warning(n: u64) -> BigUint {
    compute_exponential(n)
}

/// Runs the demo for `class` over `data`, returning how many operations it performed.\
/// The O(1) access counts as a single operation even over an empty `data`
pub fn run_demo<T>(class: ComplexityClass, data: &[T]) -> BigUint {
    match class {
        ComplexityClass::Constant    => {
            _ = constant_time_demo(data);
            BigUint::one()
        },
        ComplexityClass::Linear      => BigUint::from(linear_time_demo(data)),
        ComplexityClass::Quadratic   => BigUint::from(quadratic_time_demo(data)),
        ComplexityClass::Cubic       => BigUint::from(cubic_time_demo(data)),
        ComplexityClass::Exponential => exponential_time_warning(data.len() as u64),
    }
}
