//! Numeric reduction and formatting utilities.
//!
//! `descending_product`/`descending_sum` order operands by decreasing
//! magnitude before reducing, so results are reproducible independent of
//! input order and less prone to catastrophic cancellation/underflow.

/// Product of `xs`, multiplied in descending order of absolute value.
/// Returns `1.0` for an empty input.
pub fn descending_product(xs: impl IntoIterator<Item = f64>) -> f64 {
    let mut sorted: Vec<f64> = xs.into_iter().collect();
    sorted.sort_by(|a, b| b.abs().partial_cmp(&a.abs()).unwrap_or(std::cmp::Ordering::Equal));
    sorted.into_iter().fold(1.0, |acc, x| acc * x)
}

/// Sum of `xs`, added in descending order of absolute value. Returns `0.0`
/// for an empty input.
pub fn descending_sum(xs: impl IntoIterator<Item = f64>) -> f64 {
    let mut sorted: Vec<f64> = xs.into_iter().collect();
    sorted.sort_by(|a, b| b.abs().partial_cmp(&a.abs()).unwrap_or(std::cmp::Ordering::Equal));
    sorted.into_iter().fold(0.0, |acc, x| acc + x)
}

/// Pretty-print a finite/NaN/infinite value.
///
/// Finite values with magnitude in `[10^-scientific_threshold, 10^scientific_threshold)`
/// (and zero) are rendered fixed-point to `decimal_places`; values outside
/// that band are rendered in scientific notation to `significant_figures`.
/// `NaN`/`+inf`/`-inf` render as `nan`/`inf`/`-inf`.
pub fn format_number(
    value: f64,
    decimal_places: usize,
    significant_figures: usize,
    scientific_threshold: i32,
) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    if value == 0.0 {
        return format!("{value:.decimal_places$}");
    }

    let magnitude = value.abs().log10();
    let use_scientific = magnitude >= scientific_threshold as f64 || magnitude < -(scientific_threshold as f64);

    if use_scientific {
        let precision = significant_figures.saturating_sub(1);
        format!("{value:.precision$e}")
    } else {
        format!("{value:.decimal_places$}")
    }
}

#[cfg(test)]
#[path = "numeric_tests.rs"]
mod numeric_tests;
