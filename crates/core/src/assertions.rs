//! Matchers for writing assertions that are neither too loose nor too tight.
//!
//! A loose assertion (the value exists) passes for almost anything, and a
//! tight one (the value equals this exact literal) breaks on harmless
//! changes. These predicates check the part of a result that matters and are
//! meant to be wrapped in `assert!`.
//!
//! ```
//! use assert_drills_core::assertions::{contains_all, matches_pattern};
//!
//! let message = "The requested file was not found.";
//! assert!(matches_pattern(message, "(?i)not found").unwrap());
//! assert!(contains_all(&[1, 2, 3], &[3, 1]));
//! ```

use regex::Regex;
use serde_json::Value;

use crate::error::Result;
pub use crate::input::type_name;

/// Whether `text` contains a match for the regular expression `pattern`.
///
/// Prefix the pattern with `(?i)` for a case-insensitive match.
pub fn matches_pattern(text: &str, pattern: &str) -> Result<bool> {
    let regex = Regex::new(pattern)?;
    Ok(regex.is_match(text))
}

/// Whether every element of `needles` occurs in `haystack`, regardless of
/// order or of other elements.
pub fn contains_all<T: PartialEq>(haystack: &[T], needles: &[T]) -> bool {
    needles.iter().all(|needle| haystack.contains(needle))
}

/// Whether `actual` contains everything in `expected`.
///
/// Objects match when every key of `expected` is present in `actual` with a
/// matching value; extra keys in `actual` are ignored. Arrays must have the
/// same length and match element by element. Other values must be equal.
pub fn matches_object(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Object(actual), Value::Object(expected)) => {
            expected.iter().all(|(key, expected_value)| {
                actual
                    .get(key)
                    .is_some_and(|actual_value| matches_object(actual_value, expected_value))
            })
        }
        (Value::Array(actual), Value::Array(expected)) => {
            actual.len() == expected.len()
                && actual
                    .iter()
                    .zip(expected)
                    .all(|(actual, expected)| matches_object(actual, expected))
        }
        _ => actual == expected,
    }
}

/// Whether the dotted key `path` resolves inside `value`.
///
/// Numeric segments index into arrays, so `"items.0.name"` is a valid path.
pub fn has_property(value: &Value, path: &str) -> bool {
    property(value, path).is_some()
}

/// The value at the dotted key `path`, if any
pub fn property<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_matches_pattern() {
        let message = "The requested file was not found.";
        assert!(matches_pattern(message, "not found").unwrap());
        assert!(matches_pattern(message, "(?i)NOT FOUND").unwrap());
        assert!(!matches_pattern(message, "NOT FOUND").unwrap());
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let err = matches_pattern("text", "(unclosed").unwrap_err();
        assert!(err.to_string().starts_with("Invalid pattern"));
    }

    #[test]
    fn test_contains_all_ignores_order_and_extras() {
        assert!(contains_all(&[1, 2, 3], &[1, 2, 3]));
        assert!(contains_all(&[1, 2, 3], &[3, 1]));
        assert!(contains_all(&[1, 2, 3], &[]));
        assert!(!contains_all(&[1, 2], &[4]));
    }

    #[test]
    fn test_matches_object_subset() {
        let actual = json!({"name": "MBATheGamer", "age": 30, "tags": ["a"]});
        assert!(matches_object(&actual, &json!({"name": "MBATheGamer"})));
        assert!(matches_object(&actual, &json!({})));
        assert!(!matches_object(&actual, &json!({"name": "someone"})));
        assert!(!matches_object(&actual, &json!({"email": "x"})));
    }

    #[test]
    fn test_matches_object_nested() {
        let actual = json!({"user": {"name": "a", "id": 1}, "list": [{"x": 1, "y": 2}]});
        assert!(matches_object(&actual, &json!({"user": {"id": 1}})));
        assert!(matches_object(&actual, &json!({"list": [{"x": 1}]})));
        assert!(!matches_object(&actual, &json!({"list": []})));
    }

    #[test]
    fn test_has_property() {
        let value = json!({"name": "a", "items": [{"id": 7}]});
        assert!(has_property(&value, "name"));
        assert!(has_property(&value, "items.0.id"));
        assert!(!has_property(&value, "items.1"));
        assert!(!has_property(&value, "name.first"));
        assert_eq!(property(&value, "items.0.id"), Some(&json!(7)));
    }
}
