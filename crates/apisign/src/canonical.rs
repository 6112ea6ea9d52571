//! Deterministic canonicalization of request data.
//!
//! Signing and verification must agree on a single byte representation of
//! the request regardless of the order its parameters arrived in. This
//! module provides the two halves of that guarantee:
//!
//! 1. [`sort_data`] rebuilds a JSON value with every mapping sorted by key,
//!    at every nesting level.
//! 2. [`canonical_query_string`] flattens a mapping into the query-string
//!    form the signature is computed over:
//!
//! ```text
//! a=1&b[x]=2&b[y][0]=3&callback=https://example.com/cb?ok=1
//! ```
//!
//! Values are emitted raw. The deployed wire format is the result of
//! URL-encoding every pair and then percent-decoding the joined string,
//! which round-trips each value back to its original bytes, so the
//! serializer writes the decoded form directly. Nested mappings flatten to
//! bracketed keys, arrays to numeric indexes, `null` entries are dropped,
//! and booleans are cast to `1`/`0`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Return a copy of `value` with every nested mapping rebuilt in ascending
/// key order.
///
/// Arrays keep their positions; only their elements are canonicalized. The
/// function is pure and idempotent.
///
/// # Examples
///
/// ```
/// use apisign::canonical::sort_data;
/// use serde_json::json;
///
/// let data = json!({"b": 2, "a": {"y": 1, "x": 2}});
/// let sorted = sort_data(&data);
/// assert_eq!(sort_data(&sorted), sorted);
/// ```
#[must_use]
pub fn sort_data(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered: BTreeMap<&String, &Value> = map.iter().collect();
            let mut out = Map::new();
            for (key, item) in ordered {
                out.insert(key.clone(), sort_data(item));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_data).collect()),
        scalar => scalar.clone(),
    }
}

/// Flatten `data` into the canonical `key=value` query string the signature
/// is computed over.
///
/// Keys are emitted in ascending order at every nesting level, so the
/// result does not depend on the mapping's iteration order.
///
/// # Examples
///
/// ```
/// use apisign::canonical::canonical_query_string;
/// use serde_json::json;
///
/// let data = json!({"noncestr": "abc", "appKey": "1661408635"});
/// assert_eq!(
///     canonical_query_string(data.as_object().unwrap()),
///     "appKey=1661408635&noncestr=abc"
/// );
/// ```
#[must_use]
pub fn canonical_query_string(data: &Map<String, Value>) -> String {
    let ordered: BTreeMap<&String, &Value> = data.iter().collect();
    let mut pairs = Vec::with_capacity(data.len());
    for (key, value) in ordered {
        push_pairs(&mut pairs, key.clone(), value);
    }
    pairs.join("&")
}

/// Append the `key=value` pairs for a single entry, recursing into nested
/// structures with bracketed key paths.
fn push_pairs(pairs: &mut Vec<String>, key: String, value: &Value) {
    match value {
        // The deployed query builder drops null entries entirely.
        Value::Null => {}
        Value::Bool(flag) => pairs.push(format!("{key}={}", u8::from(*flag))),
        Value::Number(num) => pairs.push(format!("{key}={num}")),
        Value::String(text) => pairs.push(format!("{key}={text}")),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                push_pairs(pairs, format!("{key}[{index}]"), item);
            }
        }
        Value::Object(map) => {
            let ordered: BTreeMap<&String, &Value> = map.iter().collect();
            for (child, item) in ordered {
                push_pairs(pairs, format!("{key}[{child}]"), item);
            }
        }
    }
}
