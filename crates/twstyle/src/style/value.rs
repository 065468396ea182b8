//! Resolved style objects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::theme::deep_merge;

/// The CSS-in-JS property name that receives font-family fallback lists.
pub const FONT_FAMILY: &str = "fontFamily";

/// One property name, or several properties sharing one value.
///
/// `mx-4` sets both `marginLeft` and `marginRight`, so its property list is
/// `Many(["marginLeft", "marginRight"])`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyNames {
    One(String),
    Many(Vec<String>),
}

impl PropertyNames {
    /// Returns the property names in order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            PropertyNames::One(name) => vec![name.as_str()],
            PropertyNames::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }

    /// True only for the single `fontFamily` property.
    pub fn is_font_family(&self) -> bool {
        matches!(self, PropertyNames::One(name) if name == FONT_FAMILY)
    }
}

impl From<&str> for PropertyNames {
    fn from(name: &str) -> Self {
        PropertyNames::One(name.to_string())
    }
}

impl From<&[&str]> for PropertyNames {
    fn from(names: &[&str]) -> Self {
        match names {
            [single] => PropertyNames::One(single.to_string()),
            _ => PropertyNames::Many(names.iter().map(|n| n.to_string()).collect()),
        }
    }
}

/// A resolved style object: property names mapped to values.
///
/// Values are usually strings, but may be any theme value (a `default`
/// entry can hold an array or a nested object) and, for selector-scoped
/// utilities, a nested style object.
///
/// An empty `Style` is a valid result only for utilities that set nothing;
/// the resolver reports "no match" as an error, not as an empty style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(Map<String, Value>);

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Adds a declaration, returning the style for chaining.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    /// Sets a declaration in place.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(property.into(), value.into());
    }

    /// Returns the value for a property.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.0.get(property)
    }

    /// Returns the string value for a property, if it is a string.
    pub fn get_str(&self, property: &str) -> Option<&str> {
        self.0.get(property).and_then(Value::as_str)
    }

    /// Number of top-level declarations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the style has no declarations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Merges another style over this one.
    ///
    /// Later declarations override earlier ones; nested objects (selector
    /// scopes such as `::placeholder`) are merged key by key.
    pub fn merge(&mut self, other: Style) {
        deep_merge(&mut self.0, other.0);
    }

    /// Nests this style under a selector: `{ selector: { ...self } }`.
    pub fn scoped(self, selector: &str) -> Style {
        Style::new().with(selector, Value::Object(self.0))
    }

    /// Converts the style into a JSON object value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Style {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Maps every property name to the same value.
///
/// # Example
///
/// ```rust
/// use twstyle::{styleify, PropertyNames};
/// use serde_json::json;
///
/// let names = PropertyNames::Many(vec!["marginTop".into(), "marginBottom".into()]);
/// let style = styleify(&names, json!("1rem"));
/// assert_eq!(style.get_str("marginTop"), Some("1rem"));
/// assert_eq!(style.get_str("marginBottom"), Some("1rem"));
/// ```
pub fn styleify(properties: &PropertyNames, value: Value) -> Style {
    let mut style = Style::new();
    for name in properties.names() {
        style.insert(name, value.clone());
    }
    style
}

/// Returns true for values that carry nothing.
///
/// Missing values, `null`, empty objects, empty arrays and blank strings are
/// empty. `0` and `false` are not.
///
/// # Example
///
/// ```rust
/// use twstyle::is_empty;
/// use serde_json::json;
///
/// assert!(is_empty(None));
/// assert!(is_empty(Some(&json!("   "))));
/// assert!(!is_empty(Some(&json!(0))));
/// assert!(!is_empty(Some(&json!({ "a": 1 }))));
/// ```
pub fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Object(map)) => map.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Bool(_)) | Some(Value::Number(_)) => false,
    }
}
