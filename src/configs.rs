//! Contains constants used throughout this crate

/// Input sizes shown on the comparison table -- kept small, as O(n^3) grows quickly.
/// Must be strictly increasing: see [crate::InputSizeSet::new()]
pub const DEFAULT_INPUT_SIZES: [u64; 3] = [10, 100, 500];

/// The "efficiency wall": the larger `n` for which O(n^2) is confronted with O(2^n)
pub const EFFICIENCY_WALL_N: u64 = 100;

/// width of the "Input Size (n)" column
pub const SIZE_COLUMN_WIDTH: usize = 15;

/// width of the O(n), O(n^2) & O(n^3) columns
pub const COUNT_COLUMN_WIDTH: usize = 12;

/// length of the line separating the table header from its rows
pub const SEPARATOR_WIDTH: usize = 60;

/// Estimated number of atoms in the observable universe is 10^ this
pub const ATOMS_IN_UNIVERSE_EXPONENT: u32 = 80;
