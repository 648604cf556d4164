use serde_json::{Map, Number, Value};

use crate::error::CanonicalError;

/// 2^64; integral floats below it fit a u64 exactly.
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;
/// -2^63, the smallest i64.
const I64_MIN: f64 = -9_223_372_036_854_775_808.0;

/// Reduces a JSON value to its normal form.
///
/// - object keys are emitted in lexicographic order;
/// - an object entry whose (already normalized) value is an empty array is
///   dropped, children first, so nested empty arrays vanish in one pass;
/// - empty objects are kept: an absent repeated field equals an empty one,
///   an absent singular message does not equal an empty one;
/// - arrays keep their order;
/// - floats with no fractional part become integers, so `1.0` and `1` agree.
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by_key(|(key, _)| *key);
            let mut out = Map::with_capacity(entries.len());
            for (key, val) in entries {
                let normalized = normalize(val);
                if is_empty_array(&normalized) {
                    continue;
                }
                out.insert(key.clone(), normalized);
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Value::Number(n) => Value::Number(normalize_number(n)),
        other => other.clone(),
    }
}

/// Canonical bytes of an already parsed document.
pub fn canonicalize(value: &Value) -> Result<Vec<u8>, CanonicalError> {
    serde_json::to_vec(&normalize(value)).map_err(CanonicalError::Serialize)
}

/// Parses raw JSON text and returns its canonical bytes.
///
/// Malformed input is an error: it points at a broken fixture or codec.
pub fn canonical_bytes(raw: &[u8]) -> Result<Vec<u8>, CanonicalError> {
    let value: Value = serde_json::from_slice(raw).map_err(CanonicalError::Parse)?;
    canonicalize(&value)
}

/// Whether two JSON texts are equivalent under the canonical form.
pub fn equivalent(a: &[u8], b: &[u8]) -> Result<bool, CanonicalError> {
    Ok(canonical_bytes(a)? == canonical_bytes(b)?)
}

fn is_empty_array(value: &Value) -> bool {
    matches!(value, Value::Array(items) if items.is_empty())
}

fn normalize_number(n: &Number) -> Number {
    if !n.is_f64() {
        return n.clone();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => {
            if f >= 0.0 && f < U64_BOUND {
                Number::from(f as u64)
            } else if f < 0.0 && f >= I64_MIN {
                Number::from(f as i64)
            } else {
                n.clone()
            }
        }
        _ => n.clone(),
    }
}
