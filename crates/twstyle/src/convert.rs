//! Converting class strings into style objects.
//!
//! This is the entry point the source rewriter calls for each tagged
//! template literal: the class string goes in, one merged style object (or
//! the first error) comes out.
//!
//! Each token is classified in this order:
//!
//! 1. plugin utilities (by exact token)
//! 2. static utilities, unless the token is negated
//! 3. dynamic families, resolved against the theme, sign included
//!
//! Anything left over is reported as [`ResolveError::NoMatchingClass`].

use std::sync::Arc;

use log::debug;

use crate::classes::{lookup_utility, Utility};
use crate::config::ResolvedConfig;
use crate::negative::split_negative;
use crate::plugins::resolve_style_from_plugins;
use crate::resolve::{resolve_style_with, StyleRequest};
use crate::style::{ResolveError, Style};
use crate::suggest::{SoftMatch, SuggestionSource};

/// Converts class tokens using one resolved configuration.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use twstyle::{Converter, ResolvedConfig, TailwindConfig};
///
/// let converter = Converter::new(Arc::new(ResolvedConfig::new(&TailwindConfig::default())));
/// let style = converter.convert("text-red-500 font-bold -mt-4").unwrap();
///
/// assert_eq!(style.get_str("color"), Some("#f56565"));
/// assert_eq!(style.get_str("fontWeight"), Some("700"));
/// assert_eq!(style.get_str("marginTop"), Some("-1rem"));
/// ```
pub struct Converter {
    config: Arc<ResolvedConfig>,
    suggester: Box<dyn SuggestionSource>,
}

impl Converter {
    /// Creates a converter with the default [`SoftMatch`] suggestions.
    pub fn new(config: Arc<ResolvedConfig>) -> Self {
        Self::with_suggester(config, Box::new(SoftMatch::default()))
    }

    /// Creates a converter with a custom suggestion source.
    pub fn with_suggester(config: Arc<ResolvedConfig>, suggester: Box<dyn SuggestionSource>) -> Self {
        Self { config, suggester }
    }

    /// The configuration tokens are resolved against.
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Converts a whitespace-separated class string into one style.
    ///
    /// Later classes override earlier ones; selector-scoped styles merge.
    pub fn convert(&self, classes: &str) -> Result<Style, ResolveError> {
        let mut merged = Style::new();
        for token in classes.split_whitespace() {
            merged.merge(self.convert_class(token)?);
        }
        Ok(merged)
    }

    /// Converts a single class token.
    pub fn convert_class(&self, token: &str) -> Result<Style, ResolveError> {
        let split = split_negative(token);

        if let Some(style) = resolve_style_from_plugins(&self.config, token) {
            debug!("{} resolved from plugins", token);
            return Ok(style);
        }

        match lookup_utility(split.token) {
            Some(Utility::Static(style)) if !split.is_negative => Ok(style.clone()),
            Some(Utility::Dynamic { utility, key }) => {
                let style = resolve_style_with(
                    &StyleRequest {
                        styles: Some(&utility.styles),
                        key,
                        class_name: split.token,
                        prefix: split.prefix(),
                        has_suggestions: utility.has_suggestions,
                        theme: self.config.theme(),
                    },
                    self.suggester.as_ref(),
                )?;
                Ok(match utility.selector {
                    Some(selector) => style.scoped(selector),
                    None => style,
                })
            }
            _ => Err(ResolveError::NoMatchingClass {
                class_name: token.to_string(),
                suggestions: Vec::new(),
                has_suggestions: false,
            }),
        }
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
