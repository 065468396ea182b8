//! Negative variant detection for class tokens.
//!
//! A class token such as `-mt-4` denotes the negated value of `mt-4`. The
//! sign is stripped here, before any hyphen splitting happens, so the rest of
//! the resolver only ever sees the unsigned token plus a flag.

/// A class token with its leading negation marker separated out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeSplit<'a> {
    /// The token without the leading `-`.
    pub token: &'a str,
    /// Whether the original token started with `-`.
    pub is_negative: bool,
}

impl NegativeSplit<'_> {
    /// Returns the prefix used when probing negative keys in the theme.
    ///
    /// Negative tokens look up `-<key>` (e.g. `margin["-4"]`); positive
    /// tokens use an empty prefix.
    pub fn prefix(&self) -> &'static str {
        if self.is_negative {
            "-"
        } else {
            ""
        }
    }
}

/// Splits the negation marker from a class token.
///
/// Only the first character is inspected: `--x` yields `-x` with
/// `is_negative` set.
///
/// # Example
///
/// ```rust
/// use twstyle::split_negative;
///
/// let split = split_negative("-mt-4");
/// assert_eq!(split.token, "mt-4");
/// assert!(split.is_negative);
///
/// let split = split_negative("mt-4");
/// assert_eq!(split.token, "mt-4");
/// assert!(!split.is_negative);
/// ```
pub fn split_negative(token: &str) -> NegativeSplit<'_> {
    match token.strip_prefix('-') {
        Some(rest) => NegativeSplit {
            token: rest,
            is_negative: true,
        },
        None => NegativeSplit {
            token,
            is_negative: false,
        },
    }
}
