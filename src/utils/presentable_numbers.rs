//! Resting place for [ThousandsGrouped]

use std::fmt::Display;
use num_bigint::BigUint;

/// Separator placed between each group of 3 digits
pub const THOUSANDS_SEPARATOR: char = ',';

/// Presents an arbitrary precision integer with its digits grouped in thousands: `1267650600` -> `1,267,650,600`.\
/// Width & alignment flags are honored: `{:>20}` pads the grouped number.
pub struct ThousandsGrouped<'a>(pub &'a BigUint);

impl Display for ThousandsGrouped<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_str_radix(10);
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(THOUSANDS_SEPARATOR);
            }
            grouped.push(digit);
        }
        f.pad(&grouped)
    }
}

/// Shortcut for `ThousandsGrouped(value).to_string()`
pub fn thousands_grouped(value: &BigUint) -> String {
    ThousandsGrouped(value).to_string()
}

/// How many decimal digits `value` has -- `0` has 1
pub fn decimal_digits(value: &BigUint) -> usize {
    value.to_str_radix(10).len()
}
