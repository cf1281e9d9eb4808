//! Presents the growth comparison: a table of operation counts for the polynomial classes,
//! followed by the "efficiency wall" where a polynomial meets an exponential.

use std::fmt::{Display, Formatter};
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use crate::{
    configs::{ATOMS_IN_UNIVERSE_EXPONENT, COUNT_COLUMN_WIDTH, SEPARATOR_WIDTH, SIZE_COLUMN_WIDTH},
    growth_analysis::types::{ComplexityClass, ExponentialSample, GrowthRow},
    utils::presentable_numbers::{decimal_digits, ThousandsGrouped},
};

/// Estimated number of atoms in the observable universe
static ATOMS_IN_UNIVERSE: Lazy<BigUint> = Lazy::new(|| BigUint::from(10u32).pow(ATOMS_IN_UNIVERSE_EXPONENT));


/// Everything shown by the growth comparison -- see [crate::growth_analysis::growth::compare()].
/// `Display` renders it the same way as [render()]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthReport {
    pub rows:   Vec<GrowthRow>,
    pub sample: ExponentialSample,
}
impl Display for GrowthReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(&self.rows, &self.sample))
    }
}

/// Renders the human-readable comparison report. Table cells show plain integers, which may
/// overflow their columns; the efficiency wall section groups digits in thousands.
pub fn render(rows: &[GrowthRow], sample: &ExponentialSample) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 9);

    lines.push(format!("{:<sw$} | {:<cw$} | {:<cw$} | {:<cw$}",
                       "Input Size (n)", ComplexityClass::Linear, ComplexityClass::Quadratic, ComplexityClass::Cubic,
                       sw = SIZE_COLUMN_WIDTH, cw = COUNT_COLUMN_WIDTH));
    lines.push("-".repeat(SEPARATOR_WIDTH));
    for row in rows {
        lines.push(format!("{:<sw$} | {:<cw$} | {:<cw$} | {:<cw$}",
                           row.n, row.linear, row.quadratic, row.cubic,
                           sw = SIZE_COLUMN_WIDTH, cw = COUNT_COLUMN_WIDTH));
    }

    let n = sample.n;
    lines.push("----- Efficiency Wall -----".to_string());
    lines.push(format!("When n = {n}:"));
    lines.push(format!("Polynomial {}: {} operations (Easy for computers)", ComplexityClass::Quadratic, ThousandsGrouped(&sample.polynomial)));
    lines.push(format!("Exponential {}: {} operations", ComplexityClass::Exponential, ThousandsGrouped(&sample.value)));
    lines.push(format!("Note: 2^{n} has {}, while {n}^2 has {}.",
                       digits_phrase(decimal_digits(&sample.value)), digits_phrase(decimal_digits(&sample.polynomial))));
    if sample.value > *ATOMS_IN_UNIVERSE {
        lines.push(format!("2^{n} is more than the estimated number of atoms in the observable universe (10^{ATOMS_IN_UNIVERSE_EXPONENT})!"));
    }
    lines.push("This is why being in 'Polynomial Time' is the benchmark for practical software.".to_string());

    let mut report = String::new();
    for line in &lines {
        report.push_str(line.trim_end());
        report.push('\n');
    }
    report
}

fn digits_phrase(digits: usize) -> String {
    if digits == 1 { "1 digit".to_string() } else { format!("{digits} digits") }
}


#[cfg(test)]
mod tests {

    //! Unit tests for the [report](super) module

    use super::*;
    use crate::growth_analysis::{growth::compare, types::InputSizeSet};


    fn default_report() -> String {
        let sizes = InputSizeSet::new(vec![10, 100, 500]).expect("valid sizes");
        compare(&sizes, 100).to_string()
    }

    #[test]
    fn default_layout() {
        let expected = "\
Input Size (n)  | O(n)         | O(n^2)       | O(n^3)
------------------------------------------------------------
10              | 10           | 100          | 1000
100             | 100          | 10000        | 1000000
500             | 500          | 250000       | 125000000
----- Efficiency Wall -----
When n = 100:
Polynomial O(n^2): 10,000 operations (Easy for computers)
Exponential O(2^n): 1,267,650,600,228,229,401,496,703,205,376 operations
Note: 2^100 has 31 digits, while 100^2 has 5 digits.
This is why being in 'Polynomial Time' is the benchmark for practical software.
";
        assert_eq!(default_report(), expected);
    }

    #[test]
    fn render_and_display_agree() {
        let sizes = InputSizeSet::new(vec![3, 7]).expect("valid sizes");
        let report = compare(&sizes, 12);
        assert_eq!(render(&report.rows, &report.sample), report.to_string());
    }

    #[test]
    fn thousands_grouped_polynomial() {
        assert!(default_report().contains("10,000"), "n^2 for n=100 should be shown as '10,000'");
    }

    /// 2^100 is "only" ~1.27e30 -- the atoms remark appears just past 10^80
    #[test]
    fn atoms_remark() {
        let sizes = InputSizeSet::new(vec![1]).expect("valid sizes");
        assert!(!compare(&sizes, 100).to_string().contains("atoms"));
        assert!(!compare(&sizes, 265).to_string().contains("atoms"), "2^265 < 10^80");
        assert!(compare(&sizes, 266).to_string().contains("2^266 is more than the estimated number of atoms"), "2^266 > 10^80");
    }

    #[test]
    fn wide_values_overflow_their_columns() {
        let sizes = InputSizeSet::new(vec![0, 1_000_000]).expect("valid sizes");
        let report = compare(&sizes, 2).to_string();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[2], "0               | 0            | 0            | 0");
        assert_eq!(lines[3], "1000000         | 1000000      | 1000000000000 | 1000000000000000000");
        assert!(report.contains("Note: 2^2 has 1 digit, while 2^2 has 1 digit."));
    }

    #[test]
    fn no_trailing_spaces() {
        assert!(default_report().lines().all(|line| line == line.trim_end()));
    }
}
