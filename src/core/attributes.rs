use serde_json::Value;
use std::borrow::Cow;

/// Survey placeholder meaning "do not score this dimension"
pub const NO_PREFERENCE: &str = "no preference";

/// Check whether a catalog attribute carries no usable information
///
/// Null, empty strings, zero, `false` and empty containers all count as unknown.
#[inline]
pub fn is_unknown(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Check whether a survey answer should be skipped
#[inline]
pub fn is_placeholder(answer: &str) -> bool {
    answer.is_empty() || answer.to_lowercase() == NO_PREFERENCE
}

/// Render a scalar attribute as text for substring matching
#[inline]
pub fn as_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(flag) => Some(Cow::Owned(flag.to_string())),
        _ => None,
    }
}

/// Parse an ordinal level from an integer, a float (truncated) or a numeric string
#[inline]
pub fn as_level(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Case-insensitive substring test
#[inline]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_values() {
        for value in [json!(null), json!(""), json!(0), json!(0.0), json!(false), json!([]), json!({})] {
            assert!(is_unknown(&value), "{value} should be unknown");
        }
        for value in [json!("N"), json!(2), json!(true), json!(["a"])] {
            assert!(!is_unknown(&value), "{value} should be known");
        }
    }

    #[test]
    fn test_placeholder_answers() {
        assert!(is_placeholder(""));
        assert!(is_placeholder("No preference"));
        assert!(is_placeholder("NO PREFERENCE"));
        assert!(!is_placeholder("quiet"));
    }

    #[test]
    fn test_levels() {
        assert_eq!(as_level(&json!(3)), Some(3));
        assert_eq!(as_level(&json!("4")), Some(4));
        assert_eq!(as_level(&json!(" 2 ")), Some(2));
        assert_eq!(as_level(&json!(2.9)), Some(2));
        assert_eq!(as_level(&json!("invalid")), None);
        assert_eq!(as_level(&json!("2.5")), None);
        assert_eq!(as_level(&json!([1])), None);
    }

    #[test]
    fn test_text_rendering() {
        assert_eq!(as_text(&json!("Cafeteria")).as_deref(), Some("Cafeteria"));
        assert_eq!(as_text(&json!(12)).as_deref(), Some("12"));
        assert_eq!(as_text(&json!({"a": 1})), None);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Cafeteria and vending", "CAFETERIA"));
        assert!(!contains_ignore_case("Vending machines", "coffee"));
    }
}
