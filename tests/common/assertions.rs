//! Assertion utilities for testing.
//!
//! Helpers for comparing the numeric fields of JSON responses.

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

/// Read a numeric field out of a JSON object, panicking with the key name if absent.
pub fn number_field(value: &serde_json::Value, key: &str) -> f64 {
    value
        .get(key)
        .and_then(|v| v.as_f64())
        .unwrap_or_else(|| panic!("Missing numeric field {:?} in {}", key, value))
}

/// Assert that a JSON object has exactly the given keys.
pub fn assert_keys(value: &serde_json::Value, expected: &[&str]) {
    let object = value.as_object().expect("Expected a JSON object");
    let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
    let mut expected = expected.to_vec();
    keys.sort_unstable();
    expected.sort_unstable();
    assert_eq!(keys, expected, "Unexpected keys in {}", value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(78.333333333, 235.0 / 3.0, Some(1e-6));
    }

    #[test]
    fn test_assert_keys() {
        let value = serde_json::json!({"Name": "WAIKIKI", "Station": "USC00519397"});
        assert_keys(&value, &["Station", "Name"]);
        assert_eq!(
            number_field(&serde_json::json!({"Tobs": 76.0}), "Tobs"),
            76.0
        );
    }
}
