//! Utility classes contributed by plugins.
//!
//! Plugins are processed outside this crate into CSS-like rule trees. Only
//! utilities wrapped in a `@variants` at-rule are supported; component rules
//! are ignored. Each utility rule's selector must have the simple shape
//! `.name` or `.name modifier`; anything else is skipped.
//!
//! The rule list is indexed once per configuration, so each class lookup is
//! a single map access.

use std::collections::{HashMap, HashSet};

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ResolvedConfig;
use crate::style::Style;

/// The at-rule name that wraps plugin utilities.
pub const VARIANTS_AT_RULE: &str = "variants";

static SELECTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.(\S+)(\s+.*?)?$").expect("selector pattern is valid"));

/// A node of a processed plugin rule tree.
///
/// Deserializes from the `type`-tagged shape plugin pipelines emit:
///
/// ```json
/// { "type": "atrule", "name": "variants", "nodes": [
///     { "type": "rule", "selector": ".sr-only", "nodes": [
///         { "type": "decl", "prop": "position", "value": "absolute" }
///     ] }
/// ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PluginNode {
    /// An at-rule such as `@variants responsive { ... }`.
    Atrule {
        name: String,
        #[serde(default)]
        params: String,
        #[serde(default)]
        nodes: Vec<PluginNode>,
    },
    /// A selector rule.
    Rule {
        selector: String,
        #[serde(default)]
        nodes: Vec<PluginNode>,
    },
    /// A single property declaration.
    Decl { prop: String, value: String },
}

impl PluginNode {
    /// Creates a `@variants` block holding the given rules.
    pub fn variants(nodes: Vec<PluginNode>) -> Self {
        PluginNode::Atrule {
            name: VARIANTS_AT_RULE.to_string(),
            params: String::new(),
            nodes,
        }
    }

    /// Creates a selector rule from `(property, value)` pairs.
    pub fn rule(selector: &str, declarations: &[(&str, &str)]) -> Self {
        PluginNode::Rule {
            selector: selector.to_string(),
            nodes: declarations
                .iter()
                .map(|(prop, value)| PluginNode::Decl {
                    prop: prop.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    /// Visits every declaration below this node, depth first.
    fn walk_decls<'a>(&'a self, visit: &mut impl FnMut(&'a str, &'a str)) {
        match self {
            PluginNode::Decl { prop, value } => visit(prop, value),
            PluginNode::Atrule { nodes, .. } | PluginNode::Rule { nodes, .. } => {
                for node in nodes {
                    node.walk_decls(visit);
                }
            }
        }
    }
}

/// A parsed utility selector: `.sr-only focus` → (`sr-only`, `Some("focus")`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilitySelector {
    pub name: String,
    pub modifier: Option<String>,
}

impl UtilitySelector {
    /// Parses a selector of the form `.name` or `.name modifier`.
    pub fn parse(selector: &str) -> Option<Self> {
        let captures = SELECTOR.captures(selector)?;
        let name = captures.get(1)?.as_str().to_string();
        let modifier = captures
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .filter(|m| !m.is_empty());
        Some(Self { name, modifier })
    }
}

/// Plugin utilities indexed by class name.
///
/// Each entry maps the utility's declared properties to their values; rules
/// with a modifier are nested under the modifier key, so `.sr-only` plus
/// `.sr-only focus` index as `{ position: ..., focus: { ... } }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginIndex {
    classes: HashMap<String, Style>,
}

impl PluginIndex {
    /// Builds the index from processed plugin rules.
    ///
    /// The first rule for a given `(name, modifier)` wins; later duplicates
    /// are skipped.
    pub fn build(rules: &[PluginNode]) -> Self {
        let mut classes: HashMap<String, Style> = HashMap::new();
        let mut seen: HashSet<(String, Option<String>)> = HashSet::new();

        let utilities = rules.iter().filter_map(|rule| match rule {
            PluginNode::Atrule { name, nodes, .. } if name == VARIANTS_AT_RULE => Some(nodes),
            _ => None,
        });

        for child in utilities.flatten() {
            let PluginNode::Rule { selector, .. } = child else {
                continue;
            };
            let Some(parsed) = UtilitySelector::parse(selector) else {
                debug!("skipping plugin selector {:?}", selector);
                continue;
            };
            if !seen.insert((parsed.name.clone(), parsed.modifier.clone())) {
                continue;
            }

            let mut declarations = Style::new();
            child.walk_decls(&mut |prop, value| declarations.insert(prop, value));

            let entry = classes.entry(parsed.name).or_default();
            match parsed.modifier {
                Some(modifier) => entry.merge(Style::new().with(modifier, declarations.into_value())),
                None => entry.merge(declarations),
            }
        }

        Self { classes }
    }

    /// Returns the declarations for an exact class name.
    pub fn get(&self, class_name: &str) -> Option<&Style> {
        self.classes.get(class_name)
    }

    /// Number of indexed class names.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True if no plugin utility was indexed.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Looks up a class contributed by a plugin.
///
/// Returns `None` when the configuration declares no plugins or no plugin
/// utility has exactly this class name.
///
/// # Example
///
/// ```rust
/// use twstyle::{resolve_style_from_plugins, PluginNode, ResolvedConfig, TailwindConfig};
///
/// let config = TailwindConfig {
///     plugins: vec![PluginNode::variants(vec![PluginNode::rule(
///         ".sr-only",
///         &[("position", "absolute")],
///     )])],
///     ..Default::default()
/// };
/// let resolved = ResolvedConfig::new(&config);
///
/// let style = resolve_style_from_plugins(&resolved, "sr-only").unwrap();
/// assert_eq!(style.get_str("position"), Some("absolute"));
/// assert!(resolve_style_from_plugins(&resolved, "not-sr-only").is_none());
/// ```
pub fn resolve_style_from_plugins(config: &ResolvedConfig, class_name: &str) -> Option<Style> {
    config.plugin_index()?.get(class_name).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_selector() {
        assert_eq!(
            UtilitySelector::parse(".sr-only"),
            Some(UtilitySelector {
                name: "sr-only".into(),
                modifier: None
            })
        );
        assert_eq!(
            UtilitySelector::parse(".sr-only focus"),
            Some(UtilitySelector {
                name: "sr-only".into(),
                modifier: Some("focus".into())
            })
        );
    }

    #[test]
    fn test_parse_rejects_other_selectors() {
        assert_eq!(UtilitySelector::parse("sr-only"), None);
        assert_eq!(UtilitySelector::parse("#id"), None);
        assert_eq!(UtilitySelector::parse(""), None);
    }

    #[test]
    fn test_index_simple_utility() {
        let index = PluginIndex::build(&[PluginNode::variants(vec![PluginNode::rule(
            ".sr-only",
            &[("position", "absolute"), ("width", "1px")],
        )])]);

        let style = index.get("sr-only").unwrap();
        assert_eq!(style.get_str("position"), Some("absolute"));
        assert_eq!(style.get_str("width"), Some("1px"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_index_nests_modifiers() {
        let index = PluginIndex::build(&[PluginNode::variants(vec![
            PluginNode::rule(".sr-only", &[("position", "absolute")]),
            PluginNode::rule(".sr-only focus", &[("position", "static")]),
        ])]);

        let style = index.get("sr-only").unwrap();
        assert_eq!(style.get_str("position"), Some("absolute"));
        assert_eq!(style.get("focus"), Some(&json!({ "position": "static" })));
    }

    #[test]
    fn test_index_ignores_component_rules() {
        let index = PluginIndex::build(&[
            PluginNode::rule(".btn", &[("padding", "1rem")]),
            PluginNode::Atrule {
                name: "media".into(),
                params: "(min-width: 640px)".into(),
                nodes: vec![PluginNode::rule(".card", &[("margin", "0")])],
            },
        ]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_index_skips_malformed_selectors() {
        let index = PluginIndex::build(&[PluginNode::variants(vec![
            PluginNode::rule("div > p", &[("color", "red")]),
            PluginNode::rule(".ok", &[("color", "blue")]),
        ])]);
        assert_eq!(index.len(), 1);
        assert!(index.get("ok").is_some());
    }

    #[test]
    fn test_index_first_rule_wins() {
        let index = PluginIndex::build(&[PluginNode::variants(vec![
            PluginNode::rule(".skew", &[("transform", "skewY(-5deg)")]),
            PluginNode::rule(".skew", &[("transform", "skewY(5deg)")]),
        ])]);
        assert_eq!(index.get("skew").unwrap().get_str("transform"), Some("skewY(-5deg)"));
    }

    #[test]
    fn test_deserialize_rule_tree() {
        let nodes: Vec<PluginNode> = serde_json::from_value(json!([
            { "type": "atrule", "name": "variants", "params": "responsive", "nodes": [
                { "type": "rule", "selector": ".sr-only", "nodes": [
                    { "type": "decl", "prop": "position", "value": "absolute" }
                ] }
            ] }
        ]))
        .unwrap();

        let index = PluginIndex::build(&nodes);
        assert_eq!(index.get("sr-only").unwrap().get_str("position"), Some("absolute"));
    }
}
