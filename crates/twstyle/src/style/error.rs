//! Class resolution errors.

use thiserror::Error;

use crate::suggest::no_class_message;

/// Error returned when a class token cannot be turned into a style.
///
/// Configuration mistakes ([`ResolveError::MissingConfig`],
/// [`ResolveError::RequiresConfig`]) are kept apart from plain misses
/// ([`ResolveError::NoMatchingClass`]) so callers can tell a broken setup
/// from a typo in a class name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The theme has no object at the path a utility family reads from.
    #[error("{class_name} expects {path} in the Tailwind config")]
    MissingConfig { class_name: String, path: String },

    /// The theme path exists but nothing in it matches the class token.
    #[error("{}", no_class_message(class_name, suggestions, *has_suggestions))]
    NoMatchingClass {
        class_name: String,
        suggestions: Vec<String>,
        has_suggestions: bool,
    },

    /// The utility family has no style descriptor to resolve against.
    #[error("\"{class_name}\" requires \"{key}\" in the Tailwind config")]
    RequiresConfig { class_name: String, key: String },
}

impl ResolveError {
    /// Returns the class token the error refers to.
    pub fn class_name(&self) -> &str {
        match self {
            ResolveError::MissingConfig { class_name, .. }
            | ResolveError::NoMatchingClass { class_name, .. }
            | ResolveError::RequiresConfig { class_name, .. } => class_name,
        }
    }

    /// True for errors caused by the configuration rather than the token.
    pub fn is_config_error(&self) -> bool {
        !matches!(self, ResolveError::NoMatchingClass { .. })
    }
}

/// Fails with the given error when `condition` holds.
///
/// # Example
///
/// ```rust
/// use twstyle::{fail_if, ResolveError};
///
/// let missing = || ResolveError::MissingConfig {
///     class_name: "mt-4".into(),
///     path: "margin".into(),
/// };
/// assert!(fail_if(false, missing).is_ok());
/// assert!(fail_if(true, missing).is_err());
/// ```
pub fn fail_if<E>(condition: bool, error: impl FnOnce() -> E) -> Result<(), E> {
    if condition {
        Err(error())
    } else {
        Ok(())
    }
}
