//! Mapping accessors.
//!
//! `keys`, `values` and `entries` all walk the mapping in insertion order, so
//! the i-th key, value and entry always belong together.

use crate::error::{Error, Result};
use crate::value::{Mapping, Value, MAX_SAFE_INTEGER};

/// Keys in insertion order.
pub fn keys(map: &Mapping) -> Vec<String> {
    map.keys().cloned().collect()
}

/// Values in key order.
pub fn values(map: &Mapping) -> Vec<Value> {
    map.values().cloned().collect()
}

/// Lists `[key, value]` pairs, each as a two-element sequence.
pub fn entries(map: &Mapping) -> Vec<Value> {
    map.iter().map(|(k, v)| pair(k, v)).collect()
}

pub use self::entries as pairs;
pub use self::entries as to_entries;
pub use self::entries as to_pairs;

pub(crate) fn pair(key: &str, value: &Value) -> Value {
    Value::Sequence(vec![Value::String(key.to_string()), value.clone()])
}

/// Builds a mapping from `[key, value]` pairs.
///
/// Missing pair slots read as `undefined`. A repeated key keeps the position
/// of its first occurrence and the value of its last.
pub fn from_entries(seq: &[Value]) -> Result<Mapping> {
    let mut map = Mapping::with_capacity(seq.len());
    for (index, entry) in seq.iter().enumerate() {
        let Value::Sequence(entry) = entry else {
            return Err(Error::NotPair(index));
        };
        let key = entry.first().map_or(Ok("undefined".to_string()), property_key)?;
        let value = entry.get(1).cloned().unwrap_or_default();
        map.insert(key, value);
    }
    Ok(map)
}

pub use self::from_entries as from_pairs;

/// Converts a scalar into the string it is stored under as a mapping key.
pub(crate) fn property_key(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(number_key(*n)),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Undefined => Ok("undefined".to_string()),
        other => Err(Error::InvalidKey(other.kind())),
    }
}

/// Renders a number the way it appears as a mapping key (`1`, `2.5`, `NaN`).
pub(crate) fn number_key(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        (n as i64).to_string()
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping(v: serde_json::Value) -> Mapping {
        match Value::from(v) {
            Value::Mapping(map) => map,
            other => panic!("expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_keys_values_entries() {
        let map = mapping(json!({"a": "foo", "b": "bar"}));
        assert_eq!(keys(&map), vec!["a", "b"]);
        assert_eq!(values(&map), vec![Value::from("foo"), Value::from("bar")]);
        assert_eq!(
            entries(&map),
            vec![
                Value::from(json!(["a", "foo"])),
                Value::from(json!(["b", "bar"]))
            ]
        );
    }

    #[test]
    fn test_entry_aliases() {
        let map = mapping(json!({"a": "foo", "b": "bar"}));
        let want = entries(&map);
        assert_eq!(pairs(&map), want);
        assert_eq!(to_entries(&map), want);
        assert_eq!(to_pairs(&map), want);
    }

    #[test]
    fn test_from_entries() {
        let given = Value::from(json!([["a", "foo"], ["b", "bar"]]));
        let got = from_entries(given.as_sequence().unwrap()).unwrap();
        assert_eq!(got, mapping(json!({"a": "foo", "b": "bar"})));
        assert_eq!(from_pairs(given.as_sequence().unwrap()).unwrap(), got);
    }

    #[test]
    fn test_from_entries_last_duplicate_wins() {
        let given = Value::from(json!([["a", 1], ["b", 2], ["a", 3]]));
        let got = from_entries(given.as_sequence().unwrap()).unwrap();
        assert_eq!(keys(&got), vec!["a", "b"]);
        assert_eq!(got["a"], Value::from(3));
    }

    #[test]
    fn test_from_entries_key_conversion() {
        let given = Value::from(json!([[1, "one"], [true, "yes"], [null, "nil"], [2.5, "x"]]));
        let got = from_entries(given.as_sequence().unwrap()).unwrap();
        assert_eq!(keys(&got), vec!["1", "true", "null", "2.5"]);
    }

    #[test]
    fn test_from_entries_short_pairs() {
        let given = Value::from(json!([["a"], []]));
        let got = from_entries(given.as_sequence().unwrap()).unwrap();
        assert_eq!(got["a"], Value::Undefined);
        assert_eq!(got["undefined"], Value::Undefined);
    }

    #[test]
    fn test_from_entries_errors() {
        let not_pair = [Value::from(json!(["a", 1])), Value::from(7)];
        assert_eq!(from_entries(&not_pair), Err(Error::NotPair(1)));

        let bad_key = [Value::Sequence(vec![Value::symbol(None), Value::Null])];
        assert_eq!(
            from_entries(&bad_key),
            Err(Error::InvalidKey(crate::kind::Kind::Symbol))
        );
    }

    #[test]
    fn test_round_trip() {
        let map = mapping(json!({"x": [1, 2], "y": {"z": null}}));
        assert_eq!(from_entries(&entries(&map)).unwrap(), map);
    }
}
