//! Assertion utilities for testing.
//!
//! Floating-point comparisons for temperature statistics read back from JSON.

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that a JSON temperature summary has min <= avg <= max
pub fn assert_ordered_summary(summary: &serde_json::Value) {
    let field = |key: &str| {
        summary[key]
            .as_f64()
            .unwrap_or_else(|| panic!("{} is not a number in {}", key, summary))
    };
    let (min, avg, max) = (
        field("Minimum TOBS"),
        field("Average TOBS"),
        field("Maximum TOBS"),
    );
    assert!(
        min <= avg && avg <= max,
        "Summary out of order: min = {}, avg = {}, max = {}",
        min,
        avg,
        max
    );
}

/// Assert that every field of a JSON temperature summary is null
pub fn assert_null_summary(summary: &serde_json::Value) {
    for key in ["Minimum TOBS", "Average TOBS", "Maximum TOBS"] {
        assert!(
            summary.get(key).map_or(false, |v| v.is_null()),
            "{} should be present and null in {}",
            key,
            summary
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(11.666, 35.0 / 3.0, Some(0.01));
    }

    #[test]
    fn test_summary_assertions() {
        assert_ordered_summary(&serde_json::json!({
            "Minimum TOBS": 5.0, "Average TOBS": 11.67, "Maximum TOBS": 20.0
        }));
        assert_null_summary(&serde_json::json!({
            "Minimum TOBS": null, "Average TOBS": null, "Maximum TOBS": null
        }));
    }
}
