//! Assertion utilities for testing.
//!
//! Helpers for checking numeric fields of JSON responses.

/// Assert that a JSON field is a number with at most two decimal places.
///
/// # Panics
///
/// Panics if `value` is not a number or carries a third decimal digit.
pub fn assert_two_decimals(value: &serde_json::Value) {
    let number = value
        .as_f64()
        .unwrap_or_else(|| panic!("Expected a number, got {}", value));
    let scaled = number * 100.0;

    assert!(
        (scaled - scaled.round()).abs() < 1e-6,
        "Value has more than two decimals: {}",
        number
    );
}

/// Assert that a JSON field is a number equal to `expected`.
pub fn assert_number(value: &serde_json::Value, expected: f64) {
    let actual = value
        .as_f64()
        .unwrap_or_else(|| panic!("Expected a number, got {}", value));

    assert!(
        (actual - expected).abs() < 1e-9,
        "Values not equal: actual = {}, expected = {}",
        actual,
        expected
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assert_two_decimals() {
        assert_two_decimals(&json!(21.0));
        assert_two_decimals(&json!(13.69));
        assert_two_decimals(&json!(-0.13));
    }

    #[test]
    #[should_panic]
    fn test_assert_two_decimals_rejects_three() {
        assert_two_decimals(&json!(13.695));
    }
}
