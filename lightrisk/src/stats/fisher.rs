//! Fisher's exact test for 2×2 contingency tables.
//!
//! Two-sided p-value: the sum of hypergeometric probabilities of every table
//! with the observed margins whose probability does not exceed that of the
//! observed table. A relative tolerance of `1e-7` absorbs floating point noise
//! when comparing probabilities, so tables that tie with the observed one are
//! counted.

use std::fmt;

/// Relative tolerance when comparing table probabilities.
const RELATIVE_TOLERANCE: f64 = 1e-7;

/// A 2×2 contingency table `[[a, b], [c, d]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContingencyTable {
    pub a: u64,
    pub b: u64,
    pub c: u64,
    pub d: u64,
}

impl ContingencyTable {
    pub fn new(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self { a, b, c, d }
    }

    /// Grand total.
    pub fn total(&self) -> u64 {
        self.a + self.b + self.c + self.d
    }

    /// Sample odds ratio `(a·d) / (b·c)`.
    ///
    /// Infinite when only the denominator is zero, NaN when both are.
    pub fn odds_ratio(&self) -> f64 {
        let num = self.a as f64 * self.d as f64;
        let den = self.b as f64 * self.c as f64;
        if den == 0.0 {
            if num == 0.0 {
                f64::NAN
            } else {
                f64::INFINITY
            }
        } else {
            num / den
        }
    }

    /// Two-sided Fisher exact p-value.
    pub fn fisher_exact(&self) -> f64 {
        fisher_exact_two_sided(self)
    }
}

impl fmt::Display for ContingencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[[{}, {}], [{}, {}]]", self.a, self.b, self.c, self.d)
    }
}

/// Natural-log factorials `ln(k!)` for `k` in `0..=n`.
fn ln_factorials(n: u64) -> Vec<f64> {
    let mut table = Vec::with_capacity(n as usize + 1);
    let mut acc = 0.0;
    table.push(acc);
    for k in 1..=n {
        acc += (k as f64).ln();
        table.push(acc);
    }
    table
}

/// Two-sided Fisher exact p-value for a 2×2 table.
///
/// Returns 1.0 when any row or column margin is zero; there is only one table
/// with such margins.
pub fn fisher_exact_two_sided(table: &ContingencyTable) -> f64 {
    let row1 = table.a + table.b;
    let row2 = table.c + table.d;
    let col1 = table.a + table.c;
    let col2 = table.b + table.d;
    if row1 == 0 || row2 == 0 || col1 == 0 || col2 == 0 {
        return 1.0;
    }

    let n = table.total();
    let lnf = ln_factorials(n);
    let ln = |k: u64| lnf[k as usize];

    // ln P(X = x) for the top-left cell under the hypergeometric law.
    let constant = ln(row1) + ln(row2) + ln(col1) + ln(col2) - ln(n);
    let log_pmf = |x: u64| {
        constant - ln(x) - ln(row1 - x) - ln(col1 - x) - ln(row2 + x - col1)
    };

    let low = col1.saturating_sub(row2);
    let high = row1.min(col1);
    let observed = log_pmf(table.a);
    let cutoff = observed + RELATIVE_TOLERANCE.ln_1p();

    let p: f64 = (low..=high)
        .map(log_pmf)
        .filter(|&lp| lp <= cutoff)
        .map(f64::exp)
        .sum();

    p.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_tea_tasting() {
        // Fisher's lady tasting tea: [[3, 1], [1, 3]] -> 34/70
        assert_close(ContingencyTable::new(3, 1, 1, 3).fisher_exact(), 34.0 / 70.0);
    }

    #[test]
    fn test_extreme_table() {
        // [[4, 0], [0, 4]] -> 2/70
        assert_close(ContingencyTable::new(4, 0, 0, 4).fisher_exact(), 2.0 / 70.0);
    }

    #[test]
    fn test_known_value() {
        // Reference value for [[8, 2], [1, 5]]
        assert_close(ContingencyTable::new(8, 2, 1, 5).fisher_exact(), 0.034_965_034_965);
    }

    #[test]
    fn test_balanced_table_is_not_significant() {
        let p = ContingencyTable::new(10, 90, 10, 90).fisher_exact();
        assert_close(p, 1.0);
    }

    #[test]
    fn test_zero_margin_returns_one() {
        assert_eq!(ContingencyTable::new(0, 0, 3, 4).fisher_exact(), 1.0);
        assert_eq!(ContingencyTable::new(0, 5, 0, 4).fisher_exact(), 1.0);
    }

    #[test]
    fn test_odds_ratio() {
        assert_close(ContingencyTable::new(8, 2, 1, 5).odds_ratio(), 20.0);
        assert!(ContingencyTable::new(4, 0, 0, 4).odds_ratio().is_infinite());
        assert!(ContingencyTable::new(0, 0, 0, 4).odds_ratio().is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(ContingencyTable::new(1, 2, 3, 4).to_string(), "[[1, 2], [3, 4]]");
    }

    proptest! {
        /// Property: swapping the rows leaves the p-value unchanged.
        #[test]
        fn prop_row_swap_symmetry(a in 0u64..40, b in 0u64..40, c in 0u64..40, d in 0u64..40) {
            let p = ContingencyTable::new(a, b, c, d).fisher_exact();
            let swapped = ContingencyTable::new(c, d, a, b).fisher_exact();
            prop_assert!((p - swapped).abs() < 1e-9);
        }

        /// Property: p-values are probabilities.
        #[test]
        fn prop_p_value_in_unit_interval(a in 0u64..60, b in 0u64..60, c in 0u64..60, d in 0u64..60) {
            let p = ContingencyTable::new(a, b, c, d).fisher_exact();
            prop_assert!(p > 0.0 && p <= 1.0);
        }
    }
}
