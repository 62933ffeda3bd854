//! Text-to-value conversion engine.
//!
//! Option values arrive as raw tokens. This module reads them as the declared
//! value type using the type's standard textual grammar (decimal integers,
//! locale-free floats, and so on), and renders typed values back to text for
//! diagnostics. Boolean flags never pass through here; presence alone
//! triggers them.

use std::any;
use std::fmt::Display;
use std::str::FromStr;

/// A raw token that could not be read as the requested type.
///
/// Carries the raw text and the target type name. The declaration that
/// requested the conversion attaches its own option name when surfacing this
/// as a [`ParseError::Conversion`](crate::ParseError::Conversion).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unrepresentable {
    pub value: String,
    pub wanted: &'static str,
}

/// Read `raw` as a `T`.
///
/// For `T = String` this is the identity; for everything else it follows
/// `T`'s `FromStr` grammar.
pub fn from_text<T: FromStr>(raw: &str) -> Result<T, Unrepresentable> {
    raw.parse::<T>().map_err(|_| Unrepresentable {
        value: raw.to_string(),
        wanted: any::type_name::<T>(),
    })
}

/// Render a typed value back to its canonical text form.
///
/// Used only for diagnostics; parsing never round-trips through this.
pub fn to_text<T: Display>(value: &T) -> String {
    value.to_string()
}
