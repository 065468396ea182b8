//! Integration tests for the documented typography utilities.
//!
//! Every token below is part of the default vocabulary, so each must resolve
//! to a non-empty style against the default theme.

use std::sync::Arc;

use serde_json::json;
use twstyle::{
    resolve_style, Converter, PluginNode, ResolveError, ResolvedConfig, StyleList, StyleRequest,
    StyleSpec, TailwindConfig, ThemeTree,
};

const FIXED_TOKENS: &[&str] = &[
    // font family
    "font-sans", "font-serif", "font-mono",
    // font size
    "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl", "text-3xl", "text-4xl",
    "text-5xl", "text-6xl",
    // font smoothing and style
    "antialiased", "subpixel-antialiased", "italic", "not-italic",
    // font weight
    "font-hairline", "font-thin", "font-light", "font-normal", "font-medium", "font-semibold",
    "font-bold", "font-extrabold", "font-black",
    // letter spacing
    "tracking-tighter", "tracking-tight", "tracking-normal", "tracking-wide", "tracking-wider",
    "tracking-widest",
    // line height
    "leading-none", "leading-tight", "leading-snug", "leading-normal", "leading-relaxed",
    "leading-loose", "leading-3", "leading-4", "leading-5", "leading-6", "leading-7", "leading-8",
    "leading-9", "leading-10",
    // list style
    "list-none", "list-disc", "list-decimal", "list-inside", "list-outside",
    // text align
    "text-left", "text-center", "text-right", "text-justify",
    // text decoration and transform
    "underline", "line-through", "no-underline", "uppercase", "lowercase", "capitalize",
    "normal-case",
    // vertical align
    "align-baseline", "align-top", "align-middle", "align-bottom", "align-text-top",
    "align-text-bottom",
    // whitespace and word break
    "whitespace-normal", "whitespace-no-wrap", "whitespace-pre", "whitespace-pre-line",
    "whitespace-pre-wrap", "break-normal", "break-words", "break-all", "truncate",
];

const PALETTE: &[&str] = &[
    "gray", "red", "orange", "yellow", "green", "teal", "blue", "indigo", "purple", "pink",
];

const SOLID_COLORS: &[&str] = &["transparent", "current", "black", "white"];

fn color_tokens(family: &str) -> Vec<String> {
    let solids = SOLID_COLORS.iter().map(|c| format!("{}-{}", family, c));
    let shades = PALETTE.iter().flat_map(|color| {
        (1..=9).map(move |step| format!("{}-{}-{}", family, color, step * 100))
    });
    solids.chain(shades).collect()
}

fn default_converter() -> Converter {
    Converter::new(Arc::new(ResolvedConfig::new(&TailwindConfig::default())))
}

#[test]
fn test_fixed_typography_tokens_resolve() {
    let converter = default_converter();
    for token in FIXED_TOKENS {
        let style = converter
            .convert_class(token)
            .unwrap_or_else(|err| panic!("{} failed: {}", token, err));
        assert!(!style.is_empty(), "{} resolved to an empty style", token);
    }
}

#[test]
fn test_text_color_tokens_resolve() {
    let converter = default_converter();
    for token in color_tokens("text") {
        let style = converter
            .convert_class(&token)
            .unwrap_or_else(|err| panic!("{} failed: {}", token, err));
        assert!(style.get_str("color").is_some(), "{} has no color", token);
    }
}

#[test]
fn test_placeholder_color_tokens_resolve() {
    let converter = default_converter();
    for token in color_tokens("placeholder") {
        let style = converter
            .convert_class(&token)
            .unwrap_or_else(|err| panic!("{} failed: {}", token, err));
        let scoped = style.get("::placeholder").and_then(|v| v.get("color"));
        assert!(scoped.is_some(), "{} has no placeholder color", token);
    }
}

#[test]
fn test_representative_values() {
    let converter = default_converter();
    let style = converter
        .convert("text-red-500 leading-9 tracking-widest list-disc text-2xl")
        .unwrap();

    assert_eq!(style.get_str("color"), Some("#f56565"));
    assert_eq!(style.get_str("lineHeight"), Some("2.25rem"));
    assert_eq!(style.get_str("letterSpacing"), Some("0.1em"));
    assert_eq!(style.get_str("listStyleType"), Some("disc"));
    assert_eq!(style.get_str("fontSize"), Some("1.5rem"));
}

#[test]
fn test_user_theme_overrides_defaults() {
    let theme = ThemeTree::from_value(json!({
        "fontFamily": { "sans": ["ui-sans-serif", "system-ui"] },
        "extend": { "backgroundColor": { "brand": { "500": "#123456" } } }
    }))
    .unwrap();
    let converter = Converter::new(Arc::new(ResolvedConfig::new(&TailwindConfig::with_theme(
        theme,
    ))));

    let style = converter.convert("font-sans").unwrap();
    assert_eq!(style.get_str("fontFamily"), Some("ui-sans-serif, system-ui"));

    // extend adds to the palette without dropping the defaults
    let style = converter.convert("bg-brand-500").unwrap();
    assert_eq!(style.get_str("backgroundColor"), Some("#123456"));
    let style = converter.convert("bg-brand-500 bg-red-500").unwrap();
    assert_eq!(style.get_str("backgroundColor"), Some("#f56565"));
}

#[test]
fn test_user_palette_and_spacing_reach_derived_families() {
    let theme = ThemeTree::from_value(json!({
        "colors": { "brand": "#123456" },
        "spacing": { "72": "18rem" }
    }))
    .unwrap();
    let converter = Converter::new(Arc::new(ResolvedConfig::new(&TailwindConfig::with_theme(
        theme,
    ))));

    let style = converter.convert("text-brand bg-brand border-brand").unwrap();
    assert_eq!(style.get_str("color"), Some("#123456"));
    assert_eq!(style.get_str("backgroundColor"), Some("#123456"));
    assert_eq!(style.get_str("borderColor"), Some("#123456"));

    let style = converter.convert_class("placeholder-brand").unwrap();
    assert_eq!(style.get("::placeholder"), Some(&json!({ "color": "#123456" })));

    assert_eq!(
        converter.convert_class("mt-72").unwrap().get_str("marginTop"),
        Some("18rem")
    );
    assert_eq!(
        converter.convert_class("-mt-72").unwrap().get_str("marginTop"),
        Some("-18rem")
    );
    assert_eq!(
        converter.convert_class("px-72").unwrap().get_str("paddingLeft"),
        Some("18rem")
    );

    // the user palette merges into the defaults
    assert_eq!(
        converter.convert_class("text-red-500").unwrap().get_str("color"),
        Some("#f56565")
    );
}

#[test]
fn test_missing_path_and_unmatched_token_are_distinct() {
    let theme = ThemeTree::from_value(json!({ "colors": {} })).unwrap();
    let styles = StyleList::Single(StyleSpec::new("margin", "spacing"));

    let missing = resolve_style(&StyleRequest {
        styles: Some(&styles),
        key: Some("4"),
        class_name: "spacing-4",
        prefix: "",
        has_suggestions: true,
        theme: &theme,
    })
    .unwrap_err();
    assert!(matches!(missing, ResolveError::MissingConfig { .. }));

    let unmatched = resolve_style(&StyleRequest {
        styles: Some(&styles),
        key: Some("999"),
        class_name: "spacing-999",
        prefix: "",
        has_suggestions: true,
        theme: twstyle::default_theme(),
    })
    .unwrap_err();
    assert!(matches!(unmatched, ResolveError::NoMatchingClass { .. }));
}

#[test]
fn test_plugin_utilities_alongside_theme_classes() {
    let config = TailwindConfig {
        plugins: vec![PluginNode::variants(vec![PluginNode::rule(
            ".sr-only",
            &[("position", "absolute"), ("overflow", "hidden")],
        )])],
        ..Default::default()
    };
    let converter = Converter::new(Arc::new(ResolvedConfig::new(&config)));

    let style = converter.convert("sr-only text-white").unwrap();
    assert_eq!(style.get_str("position"), Some("absolute"));
    assert_eq!(style.get_str("overflow"), Some("hidden"));
    assert_eq!(style.get_str("color"), Some("#fff"));
}
