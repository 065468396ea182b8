//! Theme trees and the values stored in them.
//!
//! This module provides:
//!
//! - [`ThemeTree`]: the ordered, nested design-token mapping
//! - [`ThemeValue`]: a closed classification of a single raw value
//! - [`Node`]: a keyed or positional search space inside the tree
//! - [`default_theme`]: the built-in defaults user themes merge over

mod defaults;
mod derived;
mod tree;
mod value;

pub(crate) use defaults::base_theme;
pub use defaults::default_theme;
pub(crate) use tree::deep_merge;
pub use tree::{ThemeTree, EXTEND_KEY};
pub use value::{is_truthy, number_text, Node, ThemeValue, DEFAULT_KEY};
