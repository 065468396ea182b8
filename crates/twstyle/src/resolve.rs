//! Class token → style resolution against a theme.
//!
//! A [`StyleRequest`] names the property (or properties) a utility family
//! sets and the theme category it reads from. [`resolve`] runs the lookup
//! for one [`StyleSpec`]; [`resolve_style`] dispatches over single and
//! alternative specs and turns misses into errors.
//!
//! # Lookup order
//!
//! For one spec, against the theme category at `spec.config`:
//!
//! 1. **Direct key**: `prefix + (key or "default")` in the category.
//! 2. **Nested by part**: split the class name on `-`; the first part that
//!    is a key of the category is descended into, and the *next* part is
//!    looked up there (`text-red-500` → `colors.red["500"]`).
//! 3. **Flat prefixed part**: each part after the first is looked up as
//!    `prefix + part` directly in the category; a hit is coerced with the
//!    request key.
//!
//! The first hit wins, so an exact key always beats decomposition and
//! nested matches beat flat ones. No hit yields an empty style, which
//! [`resolve_style`] reports as [`ResolveError::NoMatchingClass`].

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::style::{coerce, coerce_value, fail_if, styleify, PropertyNames, ResolveError, Style};
use crate::suggest::{SoftMatch, SuggestionSource};
use crate::theme::{is_truthy, Node, ThemeTree, DEFAULT_KEY};

/// One candidate style domain: which properties to set, from which category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSpec {
    /// Property name(s) receiving the resolved value.
    pub prop: PropertyNames,
    /// Dot-separated theme path, e.g. `"spacing"` or `"colors.gray"`.
    pub config: String,
}

impl StyleSpec {
    /// Creates a spec for a single property.
    pub fn new(prop: &str, config: &str) -> Self {
        Self {
            prop: prop.into(),
            config: config.to_string(),
        }
    }

    /// Creates a spec for several properties sharing one value.
    pub fn many(props: &[&str], config: &str) -> Self {
        Self {
            prop: props.into(),
            config: config.to_string(),
        }
    }
}

/// The style domains a utility family may resolve to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleList {
    /// Exactly one domain (`leading` → `lineHeight`).
    Single(StyleSpec),
    /// Candidates tried in order (`text` → color, then font size).
    Alternatives(Vec<StyleSpec>),
}

impl StyleList {
    /// The theme paths this list reads from, in order.
    pub fn paths(&self) -> Vec<&str> {
        match self {
            StyleList::Single(spec) => vec![spec.config.as_str()],
            StyleList::Alternatives(specs) => specs.iter().map(|s| s.config.as_str()).collect(),
        }
    }
}

/// A single resolution job.
#[derive(Debug, Clone, Copy)]
pub struct StyleRequest<'a> {
    /// The family's style domains; `None` when the family has none configured.
    pub styles: Option<&'a StyleList>,
    /// Sub-key already known from the token, e.g. `"4"` for `mt-4`.
    pub key: Option<&'a str>,
    /// The class token with its negation marker stripped.
    pub class_name: &'a str,
    /// Prepended when probing keys: `"-"` for negative tokens, else `""`.
    pub prefix: &'a str,
    /// Whether a miss should list suggestions.
    pub has_suggestions: bool,
    /// The resolved theme.
    pub theme: &'a ThemeTree,
}

impl StyleRequest<'_> {
    /// The class token as written, including its sign.
    pub fn display_name(&self) -> String {
        format!("{}{}", self.prefix, self.class_name)
    }
}

/// Resolves a request, using [`SoftMatch`] for miss diagnostics.
///
/// # Example
///
/// ```rust
/// use twstyle::{default_theme, resolve_style, StyleList, StyleRequest, StyleSpec};
///
/// let styles = StyleList::Single(StyleSpec::new("lineHeight", "lineHeight"));
/// let style = resolve_style(&StyleRequest {
///     styles: Some(&styles),
///     key: Some("9"),
///     class_name: "leading-9",
///     prefix: "",
///     has_suggestions: true,
///     theme: default_theme(),
/// })
/// .unwrap();
///
/// assert_eq!(style.get_str("lineHeight"), Some("2.25rem"));
/// ```
pub fn resolve_style(request: &StyleRequest<'_>) -> Result<Style, ResolveError> {
    resolve_style_with(request, &SoftMatch::default())
}

/// Resolves a request, using `suggester` for miss diagnostics.
///
/// Alternatives are tried in order and the first non-empty style wins; a
/// configuration error from a tried alternative stops the search.
pub fn resolve_style_with(
    request: &StyleRequest<'_>,
    suggester: &dyn SuggestionSource,
) -> Result<Style, ResolveError> {
    let Some(styles) = request.styles else {
        return Err(ResolveError::RequiresConfig {
            class_name: request.class_name.to_string(),
            key: request.key.unwrap_or(DEFAULT_KEY).to_string(),
        });
    };

    let found = match styles {
        StyleList::Alternatives(specs) => {
            let mut found = None;
            for spec in specs {
                let style = resolve(spec, request)?;
                if !style.is_empty() {
                    found = Some(style);
                    break;
                }
            }
            found
        }
        StyleList::Single(spec) => Some(resolve(spec, request)?).filter(|s| !s.is_empty()),
    };

    if let Some(style) = &found {
        debug!("{} resolved to {} declaration(s)", request.display_name(), style.len());
    }

    fail_if(found.is_none(), || {
        let suggestions = if request.has_suggestions {
            suggester.suggest(
                request.class_name,
                request.prefix,
                request.theme,
                &styles.paths(),
            )
        } else {
            Vec::new()
        };
        ResolveError::NoMatchingClass {
            class_name: request.display_name(),
            suggestions,
            has_suggestions: request.has_suggestions,
        }
    })?;

    Ok(found.unwrap_or_default())
}

/// Runs the lookup for one spec.
///
/// Returns an empty style when nothing matches, and
/// [`ResolveError::MissingConfig`] when the spec's theme path is absent or
/// not an object.
pub fn resolve(spec: &StyleSpec, request: &StyleRequest<'_>) -> Result<Style, ResolveError> {
    let category = request
        .theme
        .at_path(&spec.config)
        .and_then(Node::from_value)
        .ok_or_else(|| ResolveError::MissingConfig {
            class_name: request.class_name.to_string(),
            path: spec.config.clone(),
        })?;

    let prefix = request.prefix;
    let props = &spec.prop;

    // Direct key, e.g. `rounded` → borderRadius["default"], `-mt-4` → margin["-4"].
    let direct_key = format!("{}{}", prefix, request.key.unwrap_or(DEFAULT_KEY));
    if category.get(&direct_key).is_some_and(is_truthy) {
        if let Some(style) = coerce(&category, Some(&direct_key), props) {
            trace!("{}: direct key {:?}", request.class_name, direct_key);
            return Ok(style);
        }
    }

    let parts = class_parts(request.class_name);

    // Nested by part: descend into the first matching part, look up the next one.
    for (index, part) in parts.iter().enumerate() {
        let Some(value) = category.get(part).filter(|v| is_truthy(v)) else {
            continue;
        };
        let Some(nested) = Node::from_value(value) else {
            continue;
        };
        if let Some(style) = coerce(&nested, parts.get(index + 1).copied(), props) {
            trace!("{}: nested part {:?}", request.class_name, part);
            return Ok(style);
        }
    }

    // Flat prefixed part: `prefix + part` straight in the category.
    for part in parts.iter().skip(1) {
        let probe = format!("{}{}", prefix, part);
        let Some(value) = category.get(&probe).filter(|v| is_truthy(v)) else {
            continue;
        };
        let Some(node) = Node::from_value(value) else {
            continue;
        };
        if let Some(value) = coerce_value(&node, request.key, props) {
            trace!("{}: prefixed part {:?}", request.class_name, probe);
            return Ok(styleify(props, value));
        }
    }

    trace!("{}: no match in {}", request.class_name, spec.config);
    Ok(Style::new())
}

/// Splits a class name on `-`, dropping empty parts.
fn class_parts(class_name: &str) -> Vec<&str> {
    if class_name.contains('-') {
        class_name.split('-').filter(|p| !p.is_empty()).collect()
    } else {
        vec![class_name]
    }
}
