//! Contains the functions computing how many operations each complexity class performs,
//! which get presented side by side by [crate::report].

use num_bigint::BigUint;
use crate::{
    growth_analysis::types::*,
    report::GrowthReport,
};


/// Computes the operations linear, quadratic & cubic algorithms perform for an input of size `n`.\
/// `n = 0` yields an all-zero row.
pub fn compute_row(n: u64) -> GrowthRow {
    GrowthRow {
        n,
        linear:    ComplexityClass::Linear.operations(n),
        quadratic: ComplexityClass::Quadratic.operations(n),
        cubic:     ComplexityClass::Cubic.operations(n),
    }
}

/// Computes `2^n` exactly -- there is no "too large to calculate" outcome
pub fn compute_exponential(n: u64) -> BigUint {
    ComplexityClass::Exponential.operations(n)
}

/// Confronts the polynomial `n^2` with the exponential `2^n` at the given "efficiency wall" `n`
pub fn compute_sample(n: u64) -> ExponentialSample {
    ExponentialSample {
        n,
        polynomial: ComplexityClass::Quadratic.operations(n),
        value:      compute_exponential(n),
    }
}

/// Computes everything the growth comparison report shows: one [GrowthRow] per input size
/// plus the [ExponentialSample] at `efficiency_wall_n`
pub fn compare(sizes: &InputSizeSet, efficiency_wall_n: u64) -> GrowthReport {
    GrowthReport {
        rows:   sizes.iter().map(compute_row).collect(),
        sample: compute_sample(efficiency_wall_n),
    }
}
