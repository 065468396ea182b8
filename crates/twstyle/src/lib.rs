//! # twstyle
//!
//! Resolve Tailwind-style utility class names into inline style objects.
//!
//! Given a class token such as `text-red-500`, `-mt-4` or `font-sans` and a
//! theme of design tokens, twstyle produces the style declarations the token
//! stands for:
//!
//! ```rust
//! use std::sync::Arc;
//! use twstyle::{Converter, ResolvedConfig, TailwindConfig};
//!
//! let config = Arc::new(ResolvedConfig::new(&TailwindConfig::default()));
//! let converter = Converter::new(config);
//!
//! let style = converter.convert("font-sans leading-9 placeholder-blue-400").unwrap();
//! assert_eq!(style.get_str("lineHeight"), Some("2.25rem"));
//! assert!(style.get_str("fontFamily").unwrap().starts_with("system-ui"));
//! ```
//!
//! ## Core pieces
//!
//! - **[`split_negative`]**: separates the `-` negation marker from a token
//! - **[`ConfigResolver`]** / **[`resolve_config`]**: merge the user theme over
//!   the built-in defaults, once
//! - **[`coerce`]**: turn a theme value (string, number, `default`-carrying
//!   object, nested map) into a style value
//! - **[`resolve_style_from_plugins`]**: look up plugin-contributed utilities
//! - **[`resolve_style`]**: the lookup algorithm for one utility family
//! - **[`Converter`]**: classify and resolve whole class strings
//!
//! ## Errors
//!
//! A token either resolves fully or fails with a [`ResolveError`].
//! Configuration problems ([`ResolveError::MissingConfig`]) are reported
//! separately from unknown tokens ([`ResolveError::NoMatchingClass`]), which
//! carry "did you mean" suggestions.

pub mod classes;
pub mod config;
pub mod convert;
pub mod negative;
pub mod plugins;
pub mod resolve;
pub mod style;
pub mod suggest;
pub mod theme;

pub use classes::{lookup_utility, DynamicUtility, Utility};
pub use config::{resolve_config, ConfigError, ConfigResolver, ResolvedConfig, TailwindConfig};
pub use convert::Converter;
pub use negative::{split_negative, NegativeSplit};
pub use plugins::{resolve_style_from_plugins, PluginIndex, PluginNode, UtilitySelector};
pub use resolve::{resolve, resolve_style, resolve_style_with, StyleList, StyleRequest, StyleSpec};
pub use style::{
    coerce, coerce_value, fail_if, is_empty, styleify, PropertyNames, ResolveError, Style,
};
pub use suggest::{no_class_message, SoftMatch, SuggestionSource};
pub use theme::{default_theme, Node, ThemeTree, ThemeValue};
