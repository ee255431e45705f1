//! JSON object helpers

use serde_json::{Map, Value};

/// Whether `input` is object-shaped, i.e. a JSON object or array.
///
/// Scalars and `null` are not objects.
pub fn is_object(input: &Value) -> bool {
    matches!(input, Value::Object(_) | Value::Array(_))
}

/// Shallow-merges JSON objects from left to right; later keys win.
///
/// Inputs that are not JSON objects are skipped. The result is always an
/// object, empty when nothing could be merged.
pub fn merge_object<'a, I>(objects: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut merged = Map::new();
    for object in objects {
        if let Value::Object(fields) = object {
            for (key, value) in fields {
                merged.insert(key.clone(), value.clone());
            }
        }
    }

    Value::Object(merged)
}
