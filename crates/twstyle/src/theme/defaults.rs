//! Built-in default theme.
//!
//! The defaults are the Tailwind v1 theme, embedded at compile time and
//! parsed once on first use. The embedded file holds only the source
//! categories; color and spacing families are derived from them.

use once_cell::sync::Lazy;

use super::tree::ThemeTree;

const DEFAULT_THEME_JSON: &str = include_str!("default_theme.json");

static BASE_THEME: Lazy<ThemeTree> = Lazy::new(|| {
    serde_json::from_str(DEFAULT_THEME_JSON).expect("embedded default theme is valid JSON")
});

static DEFAULT_THEME: Lazy<ThemeTree> = Lazy::new(|| ThemeTree::new().merged_over(&BASE_THEME));

/// The embedded categories, before derivation. User themes merge over this.
pub(crate) fn base_theme() -> &'static ThemeTree {
    &BASE_THEME
}

/// Returns the built-in default theme, derived categories included.
pub fn default_theme() -> &'static ThemeTree {
    &DEFAULT_THEME
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_theme_parses() {
        let theme = default_theme();
        assert!(!theme.is_empty());
        assert!(theme.contains_key("colors"));
        assert!(theme.contains_key("fontFamily"));
    }

    #[test]
    fn test_default_theme_values() {
        let theme = default_theme();
        assert_eq!(theme.at_path("colors.red.500"), Some(&json!("#f56565")));
        assert_eq!(theme.at_path("lineHeight.9"), Some(&json!("2.25rem")));
        assert_eq!(theme.at_path("letterSpacing.widest"), Some(&json!("0.1em")));
        assert_eq!(theme.at_path("margin.-4"), Some(&json!("-1rem")));
        assert_eq!(theme.at_path("borderRadius.default"), Some(&json!("0.25rem")));
    }

    #[test]
    fn test_default_theme_color_aliases_match_palette() {
        let theme = default_theme();
        assert_eq!(theme.get("placeholderColor"), theme.get("colors"));
        assert_eq!(theme.get("textColor"), theme.get("colors"));
        assert_eq!(theme.at_path("borderColor.default"), Some(&json!("#e2e8f0")));
        assert_eq!(theme.at_path("margin.auto"), Some(&json!("auto")));
    }

    #[test]
    fn test_base_theme_has_no_derived_categories() {
        let base = base_theme();
        assert!(base.contains_key("colors"));
        assert!(!base.contains_key("textColor"));
        assert!(!base.contains_key("margin"));
    }
}
