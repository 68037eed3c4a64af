//! Wealth-distribution statistics: Gini coefficient and percentiles.
//!
//! Operates on raw balance slices; sorting uses `OrderedFloat` for a total
//! order (inputs are validated finite before reaching this module).

use ordered_float::OrderedFloat;

/// Gini coefficient of a balance distribution, 0 = perfectly equal.
///
/// Mean-difference form over balances sorted ascending with 1-indexed
/// positions: `sum((2i - n - 1) * x_i) / (n * sum(x_i))`.
///
/// Returns 0 for an empty population and for an all-zero one (the zero
/// total would otherwise divide by zero).
pub fn gini(balances: &[f64]) -> f64 {
    let n = balances.len();
    if n == 0 {
        return 0.0;
    }
    let sorted = sorted_ascending(balances);
    let total: f64 = sorted.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, x)| (2.0 * (i + 1) as f64 - n as f64 - 1.0) * x)
        .sum();
    weighted / (n as f64 * total)
}

/// The `p`-th percentile of a balance set, `p` in [0, 100], by linear
/// interpolation between closest ranks. 0 for an empty set.
pub fn percentile(balances: &[f64], p: f64) -> f64 {
    if balances.is_empty() {
        return 0.0;
    }
    let sorted = sorted_ascending(balances);
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = p.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Median balance: the 50th percentile.
pub fn median(balances: &[f64]) -> f64 {
    percentile(balances, 50.0)
}

fn sorted_ascending(balances: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<OrderedFloat<f64>> = balances.iter().copied().map(OrderedFloat).collect();
    sorted.sort_unstable();
    sorted.into_iter().map(OrderedFloat::into_inner).collect()
}
