//! Style results and how theme values become them.
//!
//! - [`Style`]: a resolved property → value object
//! - [`PropertyNames`]: one property or several sharing a value
//! - [`coerce`]: theme node + key → style
//! - [`ResolveError`]: why a class token did not resolve

mod coerce;
mod error;
mod value;

pub use coerce::{coerce, coerce_value};
pub use error::{fail_if, ResolveError};
pub use value::{is_empty, styleify, PropertyNames, Style, FONT_FAMILY};
