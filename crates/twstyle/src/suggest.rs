//! "Did you mean" suggestions for class tokens that did not resolve.
//!
//! Suggestions are a diagnostic aid only; they never change what resolves.
//! The [`SuggestionSource`] trait is the seam for plugging in a smarter
//! matcher. [`SoftMatch`] is the built-in one: it ranks the keys of the
//! theme categories a utility family reads from by how much of the
//! unmatched part of the class they share.

use serde_json::Value;

use crate::theme::{ThemeTree, DEFAULT_KEY};

/// Produces alternative class names for a token that did not resolve.
pub trait SuggestionSource: Send + Sync {
    /// Suggests class names for `class_name` (sign already stripped).
    ///
    /// `paths` are the theme categories the utility family reads from;
    /// `prefix` is prepended to every suggestion (`"-"` for negatives).
    fn suggest(&self, class_name: &str, prefix: &str, theme: &ThemeTree, paths: &[&str])
        -> Vec<String>;
}

/// Prefix-ranked suggestions from the targeted theme categories.
///
/// # Example
///
/// ```rust
/// use twstyle::{SoftMatch, SuggestionSource, ThemeTree};
/// use serde_json::json;
///
/// let theme = ThemeTree::from_value(json!({
///     "lineHeight": { "none": "1", "normal": "1.5", "loose": "2" }
/// }))
/// .unwrap();
///
/// let found = SoftMatch::default().suggest("leading-nrm", "", &theme, &["lineHeight"]);
/// assert_eq!(found[0], "leading-none");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftMatch {
    /// Maximum number of suggestions returned.
    pub limit: usize,
}

impl Default for SoftMatch {
    fn default() -> Self {
        Self { limit: 5 }
    }
}

impl SuggestionSource for SoftMatch {
    fn suggest(
        &self,
        class_name: &str,
        prefix: &str,
        theme: &ThemeTree,
        paths: &[&str],
    ) -> Vec<String> {
        let (family, remainder) = match class_name.split_once('-') {
            Some((family, remainder)) => (family, remainder),
            None => (class_name, ""),
        };

        let mut candidates: Vec<(usize, String)> = Vec::new();
        for path in paths {
            let Some(value) = theme.at_path(path) else {
                continue;
            };
            for key in flatten_keys(value) {
                let score = shared_prefix(&key, remainder);
                if score == 0 && !remainder.is_empty() {
                    continue;
                }
                let class = if key.is_empty() {
                    format!("{}{}", prefix, family)
                } else {
                    format!("{}{}-{}", prefix, family, key)
                };
                if !candidates.iter().any(|(_, c)| *c == class) {
                    candidates.push((score, class));
                }
            }
        }

        // Stable sort keeps theme order among equal scores.
        candidates.sort_by(|a, b| b.0.cmp(&a.0));
        candidates
            .into_iter()
            .take(self.limit)
            .map(|(_, class)| class)
            .collect()
    }
}

/// Renders the message for a class token with no match.
pub fn no_class_message(class_name: &str, suggestions: &[String], has_suggestions: bool) -> String {
    let mut message = format!("✕ {} was not found", class_name);
    if has_suggestions && !suggestions.is_empty() {
        message.push_str("\n\nDid you mean one of these?\n");
        message.push_str(&suggestions.join(", "));
    }
    message
}

/// Flattens nested keys into hyphenated class suffixes.
///
/// `{ red: { 100: .., 500: .. }, black: .. }` → `red-100`, `red-500`,
/// `black`. A `default` entry maps to its parent's name.
fn flatten_keys(value: &Value) -> Vec<String> {
    let mut keys = Vec::new();
    if let Value::Object(map) = value {
        for (key, child) in map {
            let name = if key == DEFAULT_KEY { "" } else { key.as_str() };
            match child {
                Value::Object(_) => {
                    for nested in flatten_keys(child) {
                        keys.push(join_key(name, &nested));
                    }
                }
                _ => keys.push(name.to_string()),
            }
        }
    }
    keys
}

fn join_key(parent: &str, child: &str) -> String {
    match (parent.is_empty(), child.is_empty()) {
        (true, _) => child.to_string(),
        (false, true) => parent.to_string(),
        (false, false) => format!("{}-{}", parent, child),
    }
}

fn shared_prefix(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}
