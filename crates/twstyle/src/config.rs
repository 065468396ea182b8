//! Configuration loading and one-time resolution.
//!
//! A [`TailwindConfig`] is what the user supplies: a theme tree plus the
//! processed output of any plugins. [`ConfigResolver`] merges it over the
//! built-in defaults into a [`ResolvedConfig`].
//!
//! # Resolve once
//!
//! Resolution happens at most once per resolver. The first call to
//! [`ConfigResolver::resolve`] merges the configuration it is given; every
//! later call returns that same result and ignores its argument, even if a
//! different configuration is passed. Concurrent first calls are safe: only
//! one merge runs and all callers observe its result.
//!
//! [`resolve_config`] applies the same rule to a single process-wide
//! resolver.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::plugins::{PluginIndex, PluginNode};
use crate::theme::{base_theme, ThemeTree};

/// A user-supplied configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TailwindConfig {
    /// Design tokens keyed by category.
    #[serde(default)]
    pub theme: ThemeTree,
    /// Utility rules produced by the plugin pipeline.
    #[serde(default)]
    pub plugins: Vec<PluginNode>,
}

/// Error loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported config format {} (expected .json, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl TailwindConfig {
    /// Creates a configuration from a theme alone.
    pub fn with_theme(theme: ThemeTree) -> Self {
        Self {
            theme,
            plugins: Vec::new(),
        }
    }

    /// Parses a JSON configuration.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Parses a YAML configuration.
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Loads a configuration file, choosing the format by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let format = match extension.as_deref() {
            Some("json") => Format::Json,
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match format {
            Format::Json => Self::from_json_str(&text).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            }),
            Format::Yaml => Self::from_yaml_str(&text).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

enum Format {
    Json,
    Yaml,
}

/// A configuration merged over the defaults, ready for lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    theme: ThemeTree,
    plugins: Vec<PluginNode>,
    plugin_index: Option<PluginIndex>,
}

impl ResolvedConfig {
    /// Merges `user` over the built-in default theme.
    pub fn new(user: &TailwindConfig) -> Self {
        Self::with_defaults(user, base_theme())
    }

    /// Merges `user` over an explicit base theme.
    pub fn with_defaults(user: &TailwindConfig, defaults: &ThemeTree) -> Self {
        let theme = user.theme.merged_over(defaults);
        let plugin_index = (!user.plugins.is_empty()).then(|| PluginIndex::build(&user.plugins));
        debug!(
            "resolved config: {} theme categories, {} plugin rules",
            theme.keys().count(),
            user.plugins.len()
        );
        Self {
            theme,
            plugins: user.plugins.clone(),
            plugin_index,
        }
    }

    /// The merged theme.
    pub fn theme(&self) -> &ThemeTree {
        &self.theme
    }

    /// The processed plugin rules this configuration was built with.
    pub fn plugins(&self) -> &[PluginNode] {
        &self.plugins
    }

    /// The plugin utility index, or `None` when no plugins are declared.
    pub fn plugin_index(&self) -> Option<&PluginIndex> {
        self.plugin_index.as_ref()
    }
}

/// Resolves a configuration once and hands out the cached result.
///
/// See the [module docs](self) for the first-call-wins contract.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use twstyle::{ConfigResolver, TailwindConfig};
///
/// let resolver = ConfigResolver::new();
/// let first = resolver.resolve(&TailwindConfig::default());
/// let second = resolver.resolve(&TailwindConfig::default());
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
#[derive(Debug, Default)]
pub struct ConfigResolver {
    resolved: OnceCell<Arc<ResolvedConfig>>,
}

impl ConfigResolver {
    /// Creates a resolver that has not resolved anything yet.
    pub fn new() -> Self {
        Self {
            resolved: OnceCell::new(),
        }
    }

    /// Returns the resolved configuration, merging `user` on the first call.
    ///
    /// Later calls ignore `user` and return the first result.
    pub fn resolve(&self, user: &TailwindConfig) -> Arc<ResolvedConfig> {
        Arc::clone(
            self.resolved
                .get_or_init(|| Arc::new(ResolvedConfig::new(user))),
        )
    }

    /// Returns the cached configuration without resolving.
    pub fn get(&self) -> Option<Arc<ResolvedConfig>> {
        self.resolved.get().cloned()
    }

    /// True once a configuration has been resolved.
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }
}

static PROCESS_RESOLVER: Lazy<ConfigResolver> = Lazy::new(ConfigResolver::new);

/// Resolves a configuration with the process-wide resolver.
///
/// The first call in the process wins; the configuration passed to any
/// later call is ignored.
pub fn resolve_config(user: &TailwindConfig) -> Arc<ResolvedConfig> {
    PROCESS_RESOLVER.resolve(user)
}
