//! Human-readable structural descriptions of values.
//!
//! [`Type`] walks a JSON value and renders the shape of it, e.g.
//! `Array<number | string>` or `Object<string, Array<boolean>>`. It is a
//! debugging aid; the event bus uses it to describe payloads in its logs.

use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

/// Structural description of a JSON value.
#[derive(Debug, Clone, Copy)]
pub struct Type<'a> {
    value: &'a Value,
}

impl<'a> Type<'a> {
    /// Nesting depth after which children are no longer inspected.
    pub const MAX_DEPTH: usize = 32;

    /// Describe `value`.
    pub fn of(value: &'a Value) -> Self {
        Self { value }
    }

    /// Top-level kind of a value, without looking at its children.
    pub fn resolve(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        }
    }

    /// Describes a list of values as a union, `any` if one member is `any`.
    ///
    /// Used for positional argument lists, which are not themselves values.
    pub fn describe_all(values: &[Value]) -> String {
        union(values.iter().map(|value| render(value, 1)))
    }
}

impl fmt::Display for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.value, 0))
    }
}

fn render(value: &Value, depth: usize) -> String {
    if depth > Type::MAX_DEPTH {
        return format!("[Deep:{}]", Type::resolve(value));
    }

    match value {
        Value::Array(items) if items.is_empty() => "Array".to_string(),
        Value::Array(items) => {
            format!("Array<{}>", union(items.iter().map(|item| render(item, depth + 1))))
        }
        // Plain objects without fields carry no shape information.
        Value::Object(fields) if fields.is_empty() => "any".to_string(),
        Value::Object(fields) => format!(
            "Object<string, {}>",
            union(fields.values().map(|field| render(field, depth + 1)))
        ),
        other => Type::resolve(other).to_string(),
    }
}

fn union<I>(members: I) -> String
where
    I: Iterator<Item = String>,
{
    let members: BTreeSet<String> = members.collect();
    if members.contains("any") {
        return "any".to_string();
    }

    members.into_iter().collect::<Vec<_>>().join(" | ")
}

/// Name of `T` with module paths stripped, generic arguments kept.
///
/// `Option<alloc::string::String>` becomes `Option<String>`.
pub fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut short = String::with_capacity(full.len());
    let mut segment = String::new();

    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            segment.push(ch);
        } else {
            push_last_segment(&mut short, &mut segment);
            short.push(ch);
        }
    }
    push_last_segment(&mut short, &mut segment);

    short
}

fn push_last_segment(short: &mut String, segment: &mut String) {
    if let Some(last) = segment.rsplit("::").next() {
        short.push_str(last);
    }
    segment.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(Type::of(&Value::Null).to_string(), "null");
        assert_eq!(Type::of(&json!(true)).to_string(), "boolean");
        assert_eq!(Type::of(&json!(1.5)).to_string(), "number");
        assert_eq!(Type::of(&json!("x")).to_string(), "string");
    }

    #[test]
    fn test_array_union_is_sorted_and_deduplicated() {
        let value = json!(["a", 1, "b", 2, null]);
        assert_eq!(Type::of(&value).to_string(), "Array<null | number | string>");
        assert_eq!(Type::of(&json!([])).to_string(), "Array");
    }

    #[test]
    fn test_objects() {
        assert_eq!(Type::of(&json!({})).to_string(), "any");
        assert_eq!(
            Type::of(&json!({ "tags": ["a"], "name": "n" })).to_string(),
            "Object<string, Array<string> | string>"
        );
        // An empty object child collapses the union to `any`.
        assert_eq!(Type::of(&json!([{}, 1])).to_string(), "Array<any>");
    }

    #[test]
    fn test_depth_bound() {
        let mut value = json!(1);
        for _ in 0..(Type::MAX_DEPTH + 2) {
            value = json!([value]);
        }
        assert!(Type::of(&value).to_string().contains("[Deep:"));
    }

    #[test]
    fn test_describe_all() {
        assert_eq!(Type::describe_all(&[json!(1), json!("a")]), "number | string");
        assert_eq!(Type::describe_all(&[]), "");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<Option<String>>(), "Option<String>");
        assert_eq!(short_type_name::<(u8, Vec<String>)>(), "(u8, Vec<String>)");
    }
}
