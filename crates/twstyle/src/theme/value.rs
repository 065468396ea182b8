//! Typed views over raw theme values.
//!
//! Theme configurations are plain nested key/value data, so values can be
//! strings, numbers, objects carrying a `default` entry, nested maps or
//! arrays. [`ThemeValue`] classifies a raw value once, in the precedence
//! order the coercer relies on, so callers match on a closed set of shapes
//! instead of probing types ad hoc.

use serde_json::{Map, Number, Value};

/// Name of the entry used as the fallback variant of a theme object.
pub const DEFAULT_KEY: &str = "default";

/// The shape of a single theme value.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeValue<'a> {
    /// A non-empty string, used as-is.
    Text(&'a str),
    /// A number, rendered in its string form.
    Number(&'a Number),
    /// An object whose `default` entry is set; carries that entry.
    DefaultWrapped(&'a Value),
    /// A map or array without a usable `default`.
    Nested(Node<'a>),
    /// Empty strings, booleans and nulls. Never produce a style.
    Absent,
}

impl<'a> ThemeValue<'a> {
    /// Classifies a raw value.
    ///
    /// The order of checks matters: a string wins over everything, an
    /// object with a set `default` wins over treating it as a nested map.
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::String(s) if !s.is_empty() => ThemeValue::Text(s),
            Value::Number(n) => ThemeValue::Number(n),
            Value::Object(map) => match map.get(DEFAULT_KEY) {
                Some(default) if is_truthy(default) => ThemeValue::DefaultWrapped(default),
                _ => ThemeValue::Nested(Node::Map(map)),
            },
            Value::Array(items) => ThemeValue::Nested(Node::Seq(items.iter().collect())),
            _ => ThemeValue::Absent,
        }
    }
}

/// A search space for key lookups.
///
/// Maps are searched by key. Sequences are searched by position: the key
/// must be a canonical decimal index (`"2"`, not `"02"`).
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    Map(&'a Map<String, Value>),
    Seq(Vec<&'a Value>),
}

impl<'a> Node<'a> {
    /// Wraps a map or array; other values are not searchable.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Node::Map(map)),
            Value::Array(items) => Some(Node::Seq(items.iter().collect())),
            _ => None,
        }
    }

    /// Looks up a key in this node.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        match self {
            Node::Map(map) => map.get(key),
            Node::Seq(items) => index_of(key).and_then(|i| items.get(i).copied()),
        }
    }

    /// Returns the node's values in order, discarding keys.
    ///
    /// This is the positional search space the coercer falls through into
    /// when a nested level has no direct match.
    pub fn values(&self) -> Vec<&'a Value> {
        match self {
            Node::Map(map) => map.values().collect(),
            Node::Seq(items) => items.clone(),
        }
    }

    /// Joins the node's values into one string.
    ///
    /// Used for font-family fallback lists: `["ui-sans-serif", "system-ui"]`
    /// becomes `"ui-sans-serif, system-ui"`.
    pub fn join_values(&self, separator: &str) -> String {
        self.values()
            .into_iter()
            .map(join_piece)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Returns true when a value counts as set.
///
/// Empty strings, zero, `false` and `null` are unset; every map and array,
/// even an empty one, is set.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a number the way a style value expects it.
///
/// Integral floats drop their fraction: `1.0` becomes `"1"`, `0.5` stays
/// `"0.5"`.
pub fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() => float.to_string(),
        _ => number.to_string(),
    }
}

fn index_of(key: &str) -> Option<usize> {
    let index: usize = key.parse().ok()?;
    (index.to_string() == key).then_some(index)
}

fn join_piece(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(join_piece).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
