//! The utility vocabulary: which class tokens exist and what they map to.
//!
//! Static utilities (`italic`, `text-left`, `truncate`) always produce the
//! same declarations. Dynamic families (`text-*`, `mt-*`, `leading-*`) read
//! their value from the theme through a [`StyleList`].

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::resolve::{StyleList, StyleSpec};
use crate::style::Style;

/// A utility family whose value comes from the theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicUtility {
    /// Family name, the token part before the key (`"mt"` in `mt-4`).
    pub family: &'static str,
    /// Style domains to resolve against.
    pub styles: StyleList,
    /// Selector the resolved style is nested under, if any.
    pub selector: Option<&'static str>,
    /// Whether misses should list suggestions.
    pub has_suggestions: bool,
}

/// What a class token refers to.
#[derive(Debug, Clone, PartialEq)]
pub enum Utility<'a> {
    /// A fixed set of declarations.
    Static(&'static Style),
    /// A theme-backed family, with the key taken from the token.
    Dynamic {
        utility: &'static DynamicUtility,
        key: Option<&'a str>,
    },
}

type Declarations = &'static [(&'static str, &'static str)];

const STATIC_UTILITIES: &[(&str, Declarations)] = &[
    // Font smoothing
    ("antialiased", &[("WebkitFontSmoothing", "antialiased"), ("MozOsxFontSmoothing", "grayscale")]),
    ("subpixel-antialiased", &[("WebkitFontSmoothing", "auto"), ("MozOsxFontSmoothing", "auto")]),
    // Font style
    ("italic", &[("fontStyle", "italic")]),
    ("not-italic", &[("fontStyle", "normal")]),
    // List style position
    ("list-inside", &[("listStylePosition", "inside")]),
    ("list-outside", &[("listStylePosition", "outside")]),
    // Text align
    ("text-left", &[("textAlign", "left")]),
    ("text-center", &[("textAlign", "center")]),
    ("text-right", &[("textAlign", "right")]),
    ("text-justify", &[("textAlign", "justify")]),
    // Text decoration
    ("underline", &[("textDecoration", "underline")]),
    ("line-through", &[("textDecoration", "line-through")]),
    ("no-underline", &[("textDecoration", "none")]),
    // Text transform
    ("uppercase", &[("textTransform", "uppercase")]),
    ("lowercase", &[("textTransform", "lowercase")]),
    ("capitalize", &[("textTransform", "capitalize")]),
    ("normal-case", &[("textTransform", "none")]),
    // Vertical align
    ("align-baseline", &[("verticalAlign", "baseline")]),
    ("align-top", &[("verticalAlign", "top")]),
    ("align-middle", &[("verticalAlign", "middle")]),
    ("align-bottom", &[("verticalAlign", "bottom")]),
    ("align-text-top", &[("verticalAlign", "text-top")]),
    ("align-text-bottom", &[("verticalAlign", "text-bottom")]),
    // Whitespace
    ("whitespace-normal", &[("whiteSpace", "normal")]),
    ("whitespace-no-wrap", &[("whiteSpace", "nowrap")]),
    ("whitespace-pre", &[("whiteSpace", "pre")]),
    ("whitespace-pre-line", &[("whiteSpace", "pre-line")]),
    ("whitespace-pre-wrap", &[("whiteSpace", "pre-wrap")]),
    // Word break
    ("break-normal", &[("overflowWrap", "normal"), ("wordBreak", "normal")]),
    ("break-words", &[("overflowWrap", "break-word")]),
    ("break-all", &[("wordBreak", "break-all")]),
    ("truncate", &[("overflow", "hidden"), ("textOverflow", "ellipsis"), ("whiteSpace", "nowrap")]),
    // Display
    ("block", &[("display", "block")]),
    ("inline-block", &[("display", "inline-block")]),
    ("inline", &[("display", "inline")]),
    ("flex", &[("display", "flex")]),
    ("inline-flex", &[("display", "inline-flex")]),
    ("grid", &[("display", "grid")]),
    ("hidden", &[("display", "none")]),
];

/// `(family, [(properties, theme path)], selector)`
type FamilyRow = (&'static str, &'static [(&'static [&'static str], &'static str)], Option<&'static str>);

const DYNAMIC_UTILITIES: &[FamilyRow] = &[
    ("font", &[(&["fontFamily"], "fontFamily"), (&["fontWeight"], "fontWeight")], None),
    ("text", &[(&["color"], "textColor"), (&["fontSize"], "fontSize")], None),
    ("leading", &[(&["lineHeight"], "lineHeight")], None),
    ("tracking", &[(&["letterSpacing"], "letterSpacing")], None),
    ("list", &[(&["listStyleType"], "listStyleType")], None),
    ("placeholder", &[(&["color"], "placeholderColor")], Some("::placeholder")),
    ("bg", &[(&["backgroundColor"], "backgroundColor")], None),
    ("border", &[(&["borderWidth"], "borderWidth"), (&["borderColor"], "borderColor")], None),
    ("rounded", &[(&["borderRadius"], "borderRadius")], None),
    ("opacity", &[(&["opacity"], "opacity")], None),
    ("z", &[(&["zIndex"], "zIndex")], None),
    ("m", &[(&["margin"], "margin")], None),
    ("mt", &[(&["marginTop"], "margin")], None),
    ("mr", &[(&["marginRight"], "margin")], None),
    ("mb", &[(&["marginBottom"], "margin")], None),
    ("ml", &[(&["marginLeft"], "margin")], None),
    ("mx", &[(&["marginLeft", "marginRight"], "margin")], None),
    ("my", &[(&["marginTop", "marginBottom"], "margin")], None),
    ("p", &[(&["padding"], "padding")], None),
    ("pt", &[(&["paddingTop"], "padding")], None),
    ("pr", &[(&["paddingRight"], "padding")], None),
    ("pb", &[(&["paddingBottom"], "padding")], None),
    ("pl", &[(&["paddingLeft"], "padding")], None),
    ("px", &[(&["paddingLeft", "paddingRight"], "padding")], None),
    ("py", &[(&["paddingTop", "paddingBottom"], "padding")], None),
];

static STATIC_STYLES: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    STATIC_UTILITIES
        .iter()
        .map(|(class, declarations)| {
            let style = declarations
                .iter()
                .fold(Style::new(), |style, (prop, value)| style.with(*prop, *value));
            (*class, style)
        })
        .collect()
});

static DYNAMIC_FAMILIES: Lazy<HashMap<&'static str, DynamicUtility>> = Lazy::new(|| {
    DYNAMIC_UTILITIES
        .iter()
        .map(|(family, specs, selector)| {
            let mut specs: Vec<StyleSpec> = specs
                .iter()
                .map(|(props, config)| StyleSpec::many(props, config))
                .collect();
            let styles = if specs.len() == 1 {
                StyleList::Single(specs.remove(0))
            } else {
                StyleList::Alternatives(specs)
            };
            let utility = DynamicUtility {
                family: *family,
                styles,
                selector: *selector,
                has_suggestions: true,
            };
            (*family, utility)
        })
        .collect()
});

/// Returns the static declarations for a class, if it is a static utility.
pub fn static_utility(class_name: &str) -> Option<&'static Style> {
    STATIC_STYLES.get(class_name)
}

/// Finds the dynamic family a class belongs to, plus its key.
///
/// The longest family name wins among those where the class equals the
/// name or starts with `name-`: `mt-4` is family `mt` with key `4`, and
/// `rounded` is family `rounded` with no key.
pub fn dynamic_utility(class_name: &str) -> Option<(&'static DynamicUtility, Option<&str>)> {
    DYNAMIC_FAMILIES
        .values()
        .filter_map(|utility| {
            let family = utility.family;
            if class_name == family {
                Some((utility, None))
            } else {
                class_name
                    .strip_prefix(family)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .filter(|key| !key.is_empty())
                    .map(|key| (utility, Some(key)))
            }
        })
        .max_by_key(|(utility, _)| utility.family.len())
}

/// Classifies a class token (sign already stripped).
///
/// Static utilities take precedence over dynamic families, so `text-left`
/// is an alignment rather than a `text-*` lookup.
pub fn lookup_utility(class_name: &str) -> Option<Utility<'_>> {
    if let Some(style) = static_utility(class_name) {
        return Some(Utility::Static(style));
    }
    dynamic_utility(class_name).map(|(utility, key)| Utility::Dynamic { utility, key })
}
