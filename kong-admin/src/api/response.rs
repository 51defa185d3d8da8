//! Uniform wrapper around decoded Admin API responses

use std::fmt;

use serde_json::{Map, Value};

/// One decoded JSON response, with field access by sanitized name.
///
/// Top-level keys of an object response become fields after spaces and
/// hyphens are replaced with underscores, so `rate-limiting-advanced`
/// config keys and friends stay addressable with one naming scheme. Array
/// responses bind no fields and are consumed through [`to_list`].
///
/// Keys that differ only by sanitization ("a-b" next to "a_b") collide;
/// the later key wins.
///
/// [`to_list`]: ApiResponse::to_list
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    raw: Value,
    fields: Map<String, Value>,
    empty: bool,
}

fn sanitize_key(key: &str) -> String {
    key.replace([' ', '-'], "_")
}

/// Mirrors JSON truthiness: null, false, zero, and empty containers all
/// count as empty.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}

impl ApiResponse {
    /// Wrap a decoded JSON value.
    ///
    /// Empty input produces a result that is marked empty and binds no
    /// fields; callers treat that as "no entity".
    pub fn from_value(raw: Value) -> Self {
        if is_falsy(&raw) {
            return Self {
                raw,
                fields: Map::new(),
                empty: true,
            };
        }
        let mut fields = Map::new();
        if let Value::Object(entries) = &raw {
            for (key, value) in entries {
                fields.insert(sanitize_key(key), value.clone());
            }
        }
        Self {
            raw,
            fields,
            empty: false,
        }
    }

    /// Whether the source JSON was empty or otherwise falsy.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Look up a field, sanitizing `key` the same way construction did.
    /// Missing keys yield `None`, never a panic.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(&sanitize_key(key))
    }

    /// Like [`get`](ApiResponse::get), but falls back to `default` when the
    /// field is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.get(key).unwrap_or(default)
    }

    /// Convenience string accessor for the common id/name/cursor fields.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// The underlying value as an ordered sequence: an array response is
    /// returned verbatim, anything else becomes a single-element sequence.
    pub fn to_list(&self) -> Vec<Value> {
        match &self.raw {
            Value::Array(items) => items.clone(),
            other => vec![other.clone()],
        }
    }

    /// The decoded value exactly as the gateway sent it, before key
    /// sanitization.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiResponse(")?;
        if self.empty {
            write!(f, "empty")?;
        } else {
            for (index, (key, value)) in self.fields.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_keys_become_fields() {
        let response = ApiResponse::from_value(json!({
            "id": "123",
            "name": "test-service-1",
            "read timeout": 60,
            "X-Consumer-Id": "abc",
        }));

        assert!(!response.is_empty());
        assert_eq!(response.get("id"), Some(&json!("123")));
        assert_eq!(response.get("read timeout"), Some(&json!(60)));
        assert_eq!(response.get("read_timeout"), Some(&json!(60)));
        assert_eq!(response.get("X-Consumer-Id"), Some(&json!("abc")));
        assert_eq!(response.get("X_Consumer_Id"), Some(&json!("abc")));
    }

    #[test]
    fn test_get_returns_default_for_missing_key() {
        let response = ApiResponse::from_value(json!({"name": "route-1"}));
        let fallback = json!("fallback");

        assert_eq!(response.get("missing"), None);
        assert_eq!(response.get_or("missing", &fallback), &fallback);
        assert_eq!(response.get_or("name", &fallback), &json!("route-1"));
    }

    #[test]
    fn test_get_is_idempotent() {
        let response = ApiResponse::from_value(json!({"enabled": true}));

        assert_eq!(response.get("enabled"), Some(&json!(true)));
        assert_eq!(response.get("enabled"), Some(&json!(true)));
    }

    #[test]
    fn test_array_binds_no_fields() {
        let response = ApiResponse::from_value(json!([{"id": "1"}, {"id": "2"}]));

        assert!(!response.is_empty());
        assert_eq!(response.get("id"), None);
        assert_eq!(response.to_list(), vec![json!({"id": "1"}), json!({"id": "2"})]);
    }

    #[test]
    fn test_to_list_wraps_single_object() {
        let response = ApiResponse::from_value(json!({"id": "1"}));

        assert_eq!(response.to_list(), vec![json!({"id": "1"})]);
    }

    #[test]
    fn test_falsy_inputs_are_marked_empty() {
        for value in [json!(null), json!({}), json!([]), json!(""), json!(false), json!(0)] {
            let response = ApiResponse::from_value(value.clone());
            assert!(response.is_empty(), "expected {value} to be empty");
            assert_eq!(response.get("anything"), None);
        }
    }

    #[test]
    fn test_sanitization_collision_last_write_wins() {
        // "a-b" and "a_b" map to the same field name; serde_json keeps
        // object keys in document order, so "a_b" lands last.
        let decoded: Value = serde_json::from_str(r#"{"a-b": 1, "a_b": 2}"#).unwrap();
        let response = ApiResponse::from_value(decoded);

        assert_eq!(response.get("a-b"), Some(&json!(2)));
        assert_eq!(response.get("a_b"), Some(&json!(2)));
    }

    #[test]
    fn test_display_renders_fields() {
        let response = ApiResponse::from_value(json!({"id": "1", "tag-list": ["a"]}));

        assert_eq!(response.to_string(), r#"ApiResponse(id="1", tag_list=["a"])"#);
        assert_eq!(
            ApiResponse::from_value(json!(null)).to_string(),
            "ApiResponse(empty)"
        );
    }

    #[test]
    fn test_raw_preserves_original_keys() {
        let response = ApiResponse::from_value(json!({"a-b": 1}));

        assert_eq!(response.raw()["a-b"], json!(1));
    }
}
