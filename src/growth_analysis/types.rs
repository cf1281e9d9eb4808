//! Defines the enums & structs returned / shared by the growth analysis functions.

use std::fmt::{Display, Formatter};
use num_bigint::BigUint;
use num_traits::One;
use thiserror::Error;

/// The algorithm complexity classes compared by this crate, in big-O notation.
/// All but [ComplexityClass::Exponential] are polynomials -- `O(1)` being a polynomial of degree 0.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash)]
pub enum ComplexityClass {
    Constant,
    Linear,
    Quadratic,
    Cubic,
    Exponential,
}
impl ComplexityClass {
    /// every class, from the slowest to the fastest growing one
    pub const ALL: [ComplexityClass; 5] = [Self::Constant, Self::Linear, Self::Quadratic, Self::Cubic, Self::Exponential];

    /// verbose description for each enum element
    pub fn as_pretty_str(&self) -> &'static str {
        match self {
            Self::Constant    => "O(1)",
            Self::Linear      => "O(n)",
            Self::Quadratic   => "O(n^2)",
            Self::Cubic       => "O(n^3)",
            Self::Exponential => "O(2^n)",
        }
    }

    /// `k` in `O(n^k)` -- `None` if the growth is not polynomial
    pub fn polynomial_degree(&self) -> Option<u32> {
        match self {
            Self::Constant    => Some(0),
            Self::Linear      => Some(1),
            Self::Quadratic   => Some(2),
            Self::Cubic       => Some(3),
            Self::Exponential => None,
        }
    }

    /// Tells if an algorithm in this class is in P -- "efficient" or "tractable"
    pub fn is_polynomial(&self) -> bool {
        self.polynomial_degree().is_some()
    }

    /// The exact number of operations an algorithm in this class performs for an input of size `n`:
    /// `1`, `n`, `n^2`, `n^3` or `2^n` -- never overflowing. `O(1)` is `n^0`, so `1` even for `n = 0`
    pub fn operations(&self, n: u64) -> BigUint {
        match self.polynomial_degree() {
            Some(degree) => BigUint::from(n).pow(degree),
            None         => BigUint::one() << n,
        }
    }
}
impl Display for ComplexityClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // `pad()` so table columns may be aligned with {:<12}
        f.pad(self.as_pretty_str())
    }
}

/// The sizes of the inputs to compare the complexity classes with.
/// Always non-empty & strictly increasing, so the counts of every [GrowthRow] built from it increase as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSizeSet {
    sizes: Vec<u64>,
}
impl InputSizeSet {

    /// Validates `sizes` are not empty and are listed in strictly increasing order
    pub fn new(sizes: Vec<u64>) -> Result<Self, GrowthError> {
        if sizes.is_empty() {
            return Err(GrowthError::EmptyInputSizes);
        }
        if let Some(index) = sizes.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(GrowthError::NonIncreasingInputSizes {
                index: index + 1,
                previous: sizes[index],
                current: sizes[index + 1],
            });
        }
        Ok(Self { sizes })
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.sizes
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// always `false` -- kept for API symmetry with `len()`
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.sizes.iter().copied()
    }
}

/// One line of the comparison table: how many operations linear, quadratic & cubic algorithms perform for an input of size `n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthRow {
    pub n:         u64,
    /// `n`
    pub linear:    BigUint,
    /// `n^2`
    pub quadratic: BigUint,
    /// `n^3`
    pub cubic:     BigUint,
}

/// The "efficiency wall" sample: the operations of an exponential algorithm confronted with a
/// quadratic one, for a single (larger) `n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExponentialSample {
    pub n:          u64,
    /// `n^2`
    pub polynomial: BigUint,
    /// `2^n`
    pub value:      BigUint,
}

/// Errors when building an [InputSizeSet]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GrowthError {
    #[error("Input sizes must not be empty")]
    EmptyInputSizes,

    #[error("Input sizes must be strictly increasing: size #{index} ({current}) is not greater than its predecessor ({previous})")]
    NonIncreasingInputSizes {
        /// position of the offending size
        index:    usize,
        previous: u64,
        current:  u64,
    },
}
