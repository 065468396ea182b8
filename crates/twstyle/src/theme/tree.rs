//! The nested design-token tree.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::derived::{fill_derived, is_derived};

/// Key under which a user theme declares additions rather than overrides.
pub const EXTEND_KEY: &str = "extend";

/// An ordered, arbitrarily nested mapping of design tokens.
///
/// Top-level keys are categories (`colors`, `spacing`, `fontFamily`, ...).
/// Leaves are strings or numbers; intermediate objects may carry a
/// `default` entry. Key order is insertion order.
///
/// # Example
///
/// ```rust
/// use twstyle::ThemeTree;
/// use serde_json::json;
///
/// let theme = ThemeTree::from_value(json!({
///     "colors": { "red": { "500": "#f56565" } }
/// }))
/// .unwrap();
///
/// assert_eq!(theme.at_path("colors.red.500"), Some(&json!("#f56565")));
/// assert_eq!(theme.at_path("spacing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeTree(Map<String, Value>);

impl ThemeTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wraps a JSON object. Returns `None` for any other value.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Returns the top-level entry for a category.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Walks a dot-separated path (`"colors.red"`) from the root.
    pub fn at_path(&self, path: &str) -> Option<&Value> {
        value_at_path(&self.0, path)
    }

    /// Returns true if a top-level category exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates over the top-level category names in order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Returns true if the tree has no categories.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Inserts or replaces a top-level category, returning the tree for chaining.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Merges `self` (the user tree) over `base`.
    ///
    /// User entries win at every nesting level; keys present in only one of
    /// the trees are kept. A user `extend` category is merged on top and
    /// removed, so extensions add to the defaults instead of replacing whole
    /// categories.
    ///
    /// Categories derived from others (`textColor` from `colors`, `margin`
    /// from `spacing`, ...) are recomputed from the merged result unless the
    /// user sets them. Extensions of a derived category apply after that.
    pub fn merged_over(&self, base: &ThemeTree) -> ThemeTree {
        let mut user = self.0.clone();
        let extend = match user.remove(EXTEND_KEY) {
            Some(Value::Object(extend)) => extend,
            _ => Map::new(),
        };
        let (extend_derived, extend_sources): (Map<String, Value>, Map<String, Value>) =
            extend.into_iter().partition(|(key, _)| is_derived(key));

        let mut merged = base.0.clone();
        deep_merge(&mut merged, user.clone());
        deep_merge(&mut merged, extend_sources);
        fill_derived(&mut merged, |category| user.contains_key(category));
        deep_merge(&mut merged, extend_derived);
        merged.remove(EXTEND_KEY);

        ThemeTree(merged)
    }
}

impl From<Map<String, Value>> for ThemeTree {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Walks a dot-separated path through nested objects.
pub(crate) fn value_at_path<'a>(map: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    segments.try_fold(map.get(first)?, |value, segment| match value {
        Value::Object(map) => map.get(segment),
        _ => None,
    })
}

/// Merges `overlay` into `target`, recursing where both sides hold objects.
pub(crate) fn deep_merge(target: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match value {
            Value::Object(incoming) => match target.get_mut(&key) {
                Some(Value::Object(existing)) => deep_merge(existing, incoming),
                _ => {
                    target.insert(key, Value::Object(incoming));
                }
            },
            value => {
                target.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: Value) -> ThemeTree {
        ThemeTree::from_value(value).unwrap()
    }

    #[test]
    fn test_at_path_walks_nested_objects() {
        let theme = tree(json!({ "colors": { "red": { "500": "#f56565" } } }));
        assert!(theme.at_path("colors").is_some());
        assert_eq!(theme.at_path("colors.red.500"), Some(&json!("#f56565")));
        assert_eq!(theme.at_path("colors.red.500.x"), None);
        assert_eq!(theme.at_path("colors.blue"), None);
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(ThemeTree::from_value(json!([1, 2])).is_none());
        assert!(ThemeTree::from_value(json!("x")).is_none());
    }

    #[test]
    fn test_merge_user_wins_at_every_level() {
        let base = tree(json!({
            "colors": { "red": { "100": "#fff5f5", "500": "#f56565" }, "black": "#000" },
            "spacing": { "1": "0.25rem" }
        }));
        let user = tree(json!({
            "colors": { "red": { "500": "#ff0000" }, "brand": "#123456" }
        }));

        let merged = user.merged_over(&base);

        assert_eq!(merged.at_path("colors.red.500"), Some(&json!("#ff0000")));
        assert_eq!(merged.at_path("colors.red.100"), Some(&json!("#fff5f5")));
        assert_eq!(merged.at_path("colors.black"), Some(&json!("#000")));
        assert_eq!(merged.at_path("colors.brand"), Some(&json!("#123456")));
        assert_eq!(merged.at_path("spacing.1"), Some(&json!("0.25rem")));
    }

    #[test]
    fn test_merge_scalar_replaces_object() {
        let base = tree(json!({ "opacity": { "50": "0.5" } }));
        let user = tree(json!({ "opacity": "none" }));
        let merged = user.merged_over(&base);
        assert_eq!(merged.get("opacity"), Some(&json!("none")));
    }

    #[test]
    fn test_merge_applies_extend() {
        let base = tree(json!({ "spacing": { "1": "0.25rem" } }));
        let user = tree(json!({
            "extend": { "spacing": { "72": "18rem" } }
        }));

        let merged = user.merged_over(&base);

        assert_eq!(merged.at_path("spacing.1"), Some(&json!("0.25rem")));
        assert_eq!(merged.at_path("spacing.72"), Some(&json!("18rem")));
        assert!(!merged.contains_key(EXTEND_KEY));
    }

    #[test]
    fn test_merge_derives_color_and_spacing_categories() {
        let base = tree(json!({
            "colors": { "red": { "500": "#f56565" } },
            "spacing": { "4": "1rem" }
        }));
        let user = tree(json!({
            "colors": { "brand": "#123456" },
            "extend": { "spacing": { "72": "18rem" } }
        }));

        let merged = user.merged_over(&base);

        assert_eq!(merged.at_path("textColor.brand"), Some(&json!("#123456")));
        assert_eq!(merged.at_path("backgroundColor.red.500"), Some(&json!("#f56565")));
        assert_eq!(merged.at_path("margin.72"), Some(&json!("18rem")));
        assert_eq!(merged.at_path("margin.-72"), Some(&json!("-18rem")));
        assert_eq!(merged.at_path("padding.4"), Some(&json!("1rem")));
    }

    #[test]
    fn test_merge_recomputes_stale_base_copies() {
        let base = tree(json!({
            "colors": { "red": "#f56565" },
            "textColor": { "red": "#f56565" }
        }));
        let user = tree(json!({ "colors": { "brand": "#123456" } }));

        let merged = user.merged_over(&base);

        assert_eq!(merged.at_path("textColor.brand"), Some(&json!("#123456")));
    }

    #[test]
    fn test_merge_keeps_user_derived_category() {
        let base = tree(json!({ "colors": { "red": "#f56565" } }));
        let user = tree(json!({
            "textColor": { "ink": "#111" },
            "extend": { "backgroundColor": { "paper": "#fafafa" } }
        }));

        let merged = user.merged_over(&base);

        assert_eq!(merged.get("textColor"), Some(&json!({ "ink": "#111" })));
        assert_eq!(merged.at_path("backgroundColor.red"), Some(&json!("#f56565")));
        assert_eq!(merged.at_path("backgroundColor.paper"), Some(&json!("#fafafa")));
    }

    #[test]
    fn test_keys_preserve_insertion_order() {
        let theme = ThemeTree::new()
            .with("zIndex", json!({}))
            .with("colors", json!({}))
            .with("spacing", json!({}));
        let keys: Vec<_> = theme.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zIndex", "colors", "spacing"]);
    }
}
