//! Shared helpers for integration tests

#![allow(dead_code)]

/// Tolerance used for all floating-point comparisons
pub const EPS: f64 = 1e-9;

/// Assert two floats agree within [`EPS`]
pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{}: expected {}, got {} (diff {})",
        what,
        expected,
        actual,
        (actual - expected).abs()
    );
}

/// Assert two ratio tables agree element-wise within [`EPS`]
pub fn assert_all_close(actual: &[f64], expected: &[f64], what: &str) {
    assert_eq!(actual.len(), expected.len(), "{}: length differs", what);
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_close(*a, *e, &format!("{} degree {}", what, i));
    }
}
