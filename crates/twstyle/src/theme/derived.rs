//! Categories computed from other categories of the merged theme.
//!
//! `textColor`, `backgroundColor` and friends read from `colors`; `margin`
//! and `padding` read from `spacing`. They are filled in after the user
//! theme is merged, so a user palette reaches every color family. A category
//! the user sets explicitly is left alone.

use serde_json::{Map, Value};

use super::tree::value_at_path;

/// How a derived category is built from its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Derivation {
    /// The source as is.
    Copy,
    /// The source plus a `default` entry read from a path inside it.
    WithDefault { path: &'static str, fallback: &'static str },
    /// `auto`, the source, then a negated entry for every non-zero value.
    WithAutoAndNegatives,
}

/// `(category, source category, derivation)`
const DERIVED_CATEGORIES: &[(&str, &str, Derivation)] = &[
    ("textColor", "colors", Derivation::Copy),
    ("placeholderColor", "colors", Derivation::Copy),
    ("backgroundColor", "colors", Derivation::Copy),
    (
        "borderColor",
        "colors",
        Derivation::WithDefault {
            path: "gray.300",
            fallback: "currentColor",
        },
    ),
    ("margin", "spacing", Derivation::WithAutoAndNegatives),
    ("padding", "spacing", Derivation::Copy),
];

/// Returns true if `category` is computed from another category.
pub(crate) fn is_derived(category: &str) -> bool {
    DERIVED_CATEGORIES.iter().any(|(name, _, _)| *name == category)
}

/// Computes every derived category the user did not set.
///
/// A category whose source is missing or not a map is skipped.
pub(crate) fn fill_derived(theme: &mut Map<String, Value>, user_sets: impl Fn(&str) -> bool) {
    for (category, source, derivation) in DERIVED_CATEGORIES {
        if user_sets(*category) {
            continue;
        }
        let derived = match theme.get(*source) {
            Some(Value::Object(source)) => derivation.apply(source),
            _ => continue,
        };
        theme.insert(category.to_string(), Value::Object(derived));
    }
}

impl Derivation {
    fn apply(self, source: &Map<String, Value>) -> Map<String, Value> {
        match self {
            Derivation::Copy => source.clone(),
            Derivation::WithDefault { path, fallback } => {
                let default = value_at_path(source, path)
                    .cloned()
                    .unwrap_or_else(|| Value::String(fallback.to_string()));
                let mut derived = source.clone();
                derived.insert("default".to_string(), default);
                derived
            }
            Derivation::WithAutoAndNegatives => {
                let mut derived = Map::new();
                derived.insert("auto".to_string(), Value::String("auto".to_string()));
                derived.extend(source.clone());
                derived.extend(negated(source));
                derived
            }
        }
    }
}

/// `{"4": "1rem"}` → `{"-4": "-1rem"}`, skipping zero and non-scalar values.
fn negated(scale: &Map<String, Value>) -> Vec<(String, Value)> {
    scale
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::String(s) if s != "0" => s.clone(),
                Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => super::number_text(n),
                _ => return None,
            };
            Some((format!("-{}", key), Value::String(format!("-{}", text))))
        })
        .collect()
}
