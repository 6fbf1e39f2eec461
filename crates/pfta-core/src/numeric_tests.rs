use super::*;

#[test]
fn descending_product_of_empty_is_one() {
    assert_eq!(descending_product(std::iter::empty()), 1.0);
}

#[test]
fn descending_product_matches_plain_product_for_commutative_multiplication() {
    let xs = [2.0, 0.5, 10.0, 0.1];
    let expected = 2.0 * 0.5 * 10.0 * 0.1;
    assert!((descending_product(xs) - expected).abs() < 1e-12);
}

#[test]
fn descending_sum_of_empty_is_zero() {
    assert_eq!(descending_sum(std::iter::empty()), 0.0);
}

#[test]
fn descending_sum_orders_largest_magnitude_first() {
    let xs = [1e-20, 1.0, 1e-20, -1.0];
    // Largest magnitudes (1.0, -1.0) combine first regardless of input order.
    assert!((descending_sum(xs) - 2e-20).abs() < 1e-25);
}

#[test]
fn format_number_reports_nan_and_infinities() {
    assert_eq!(format_number(f64::NAN, 3, 3, 6), "nan");
    assert_eq!(format_number(f64::INFINITY, 3, 3, 6), "inf");
    assert_eq!(format_number(f64::NEG_INFINITY, 3, 3, 6), "-inf");
}

#[test]
fn format_number_zero_is_fixed_point() {
    assert_eq!(format_number(0.0, 3, 3, 6), "0.000");
}

#[test]
fn format_number_uses_fixed_point_within_band() {
    assert_eq!(format_number(1.5, 2, 3, 6), "1.50");
}

#[test]
fn format_number_switches_to_scientific_outside_band() {
    let s = format_number(1.2345e-10, 3, 4, 6);
    assert!(s.contains('e'));
}
