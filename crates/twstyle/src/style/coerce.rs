//! Turning theme values into style values.
//!
//! Given a node of the theme and a key, the coercer tries, in order:
//!
//! 1. **String-ish**: a non-empty string is used as-is, a number in its
//!    string form.
//! 2. **Default**: an object with a set `default` entry yields that entry.
//! 3. **Font family**: for the `fontFamily` property only, any map or array
//!    is joined with `", "` into a fallback list.
//! 4. **Positional fall-through**: any other map or array is flattened to its
//!    values and searched again with the *same* key, by position.
//!
//! Step 4 matches by index, not by name, so `"0"` picks the first value of a
//! nested map. Nothing else falls through.

use serde_json::Value;

use super::value::{styleify, PropertyNames, Style};
use crate::theme::{number_text, Node, ThemeValue};

/// Coerces `node[key]` into a style for `properties`.
///
/// Returns `None` when nothing at this node can produce a value.
///
/// # Example
///
/// ```rust
/// use twstyle::{coerce, Node};
/// use serde_json::json;
///
/// let theme = json!({ "normal": { "default": "1.5" } });
/// let node = Node::from_value(&theme).unwrap();
///
/// let style = coerce(&node, Some("normal"), &"lineHeight".into()).unwrap();
/// assert_eq!(style.get_str("lineHeight"), Some("1.5"));
/// ```
pub fn coerce(node: &Node<'_>, key: Option<&str>, properties: &PropertyNames) -> Option<Style> {
    coerce_value(node, key, properties).map(|value| styleify(properties, value))
}

/// Coerces `node[key]` into a bare value, without wrapping it in a style.
pub fn coerce_value(
    node: &Node<'_>,
    key: Option<&str>,
    properties: &PropertyNames,
) -> Option<Value> {
    let key = key?;
    let value = node.get(key)?;

    match ThemeValue::classify(value) {
        ThemeValue::Text(text) => Some(Value::String(text.to_string())),
        ThemeValue::Number(number) => Some(Value::String(number_text(number))),
        ThemeValue::DefaultWrapped(default) => Some(default.clone()),
        ThemeValue::Nested(inner) => {
            if properties.is_font_family() {
                return Some(Value::String(inner.join_values(", ")));
            }
            coerce_value(&Node::Seq(inner.values()), Some(key), properties)
        }
        ThemeValue::Absent => None,
    }
}
