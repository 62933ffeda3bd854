//! Option declarations and the heterogeneous declaration set.
//!
//! Declarations are created with their concrete value types, dispatched
//! through `dyn Opt` while the parser walks the token stream, and drained
//! back into a typed tuple afterwards.

use std::fmt::Display;
use std::str::FromStr;

use crate::convert;
use crate::error::{ParseError, ParseResult};

/// Runtime capability surface shared by all declarations.
///
/// The parser only sees declarations through this trait; the concrete value
/// type stays erased until extraction.
pub trait Opt {
    fn name(&self) -> &str;
    fn short(&self) -> Option<char>;
    fn help(&self) -> &str;

    /// Whether the option consumes a value token.
    fn takes_value(&self) -> bool;

    /// Store a raw value, overwriting any earlier occurrence.
    fn assign(&mut self, raw: &str) -> ParseResult<()>;

    /// Mark a boolean flag as present.
    fn trigger(&mut self);
}

/// A declaration whose value is parsed as `T`.
///
/// The slot starts empty and must be filled during the parse; an empty slot
/// at extraction time is a [`ParseError::MissingRequired`].
#[derive(Debug, Clone)]
pub struct Valued<T> {
    name: String,
    short: Option<char>,
    help: String,
    slot: Option<T>,
}

/// A boolean flag declaration. Presence alone sets it.
#[derive(Debug, Clone)]
pub struct Flag {
    name: String,
    short: Option<char>,
    help: String,
    triggered: bool,
}

/// Declare a value-taking option.
pub fn arg<T>(
    name: impl Into<String>,
    short: impl Into<Option<char>>,
    help: impl Into<String>,
) -> Valued<T> {
    Valued {
        name: name.into(),
        short: short.into(),
        help: help.into(),
        slot: None,
    }
}

/// Declare a boolean flag.
pub fn flag(
    name: impl Into<String>,
    short: impl Into<Option<char>>,
    help: impl Into<String>,
) -> Flag {
    Flag {
        name: name.into(),
        short: short.into(),
        help: help.into(),
        triggered: false,
    }
}

impl<T> Opt for Valued<T>
where
    T: FromStr + Display,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn short(&self) -> Option<char> {
        self.short
    }

    fn help(&self) -> &str {
        &self.help
    }

    fn takes_value(&self) -> bool {
        true
    }

    fn assign(&mut self, raw: &str) -> ParseResult<()> {
        let value = convert::from_text::<T>(raw).map_err(|e| ParseError::Conversion {
            option: format!("--{}", self.name),
            value: e.value,
            wanted: e.wanted,
        })?;
        tracing::trace!("assigned --{} = {}", self.name, convert::to_text(&value));
        self.slot = Some(value);
        Ok(())
    }

    fn trigger(&mut self) {
        // Valued options always go through assign; nothing to do here.
    }
}

impl Opt for Flag {
    fn name(&self) -> &str {
        &self.name
    }

    fn short(&self) -> Option<char> {
        self.short
    }

    fn help(&self) -> &str {
        &self.help
    }

    fn takes_value(&self) -> bool {
        false
    }

    fn assign(&mut self, _raw: &str) -> ParseResult<()> {
        // Flags never request a value; a well-formed parser won't call this.
        Ok(())
    }

    fn trigger(&mut self) {
        self.triggered = true;
    }
}

/// Typed drain performed once the token stream is exhausted.
pub trait Declared: Opt {
    type Value;

    /// Consume the declaration, yielding its final value.
    fn finish(self) -> ParseResult<Self::Value>;
}

impl<T> Declared for Valued<T>
where
    T: FromStr + Display,
{
    type Value = T;

    fn finish(self) -> ParseResult<T> {
        self.slot.ok_or_else(|| ParseError::MissingRequired {
            option: format!("--{}", self.name),
        })
    }
}

impl Declared for Flag {
    type Value = bool;

    fn finish(self) -> ParseResult<bool> {
        Ok(self.triggered)
    }
}

/// A fixed, heterogeneous list of declarations.
///
/// Implemented for tuples of declarations up to arity 12. The registry hands
/// out positions into the tuple, erasing the member types; `into_values`
/// recovers them in declaration order.
pub trait OptionSet {
    /// Tuple of final value types, in declaration order.
    type Values;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> &dyn Opt;

    fn get_mut(&mut self, index: usize) -> &mut dyn Opt;

    /// Drain every declaration into its final typed value.
    fn into_values(self) -> ParseResult<Self::Values>;
}

macro_rules! option_set_tuple {
    ($( $decl:ident => $idx:tt ),+) => {
        impl<$( $decl: Declared ),+> OptionSet for ($( $decl, )+) {
            type Values = ($( $decl::Value, )+);

            fn len(&self) -> usize {
                [$( stringify!($idx) ),+].len()
            }

            fn get(&self, index: usize) -> &dyn Opt {
                match index {
                    $( $idx => &self.$idx, )+
                    _ => unreachable!("index past the declaration set"),
                }
            }

            fn get_mut(&mut self, index: usize) -> &mut dyn Opt {
                match index {
                    $( $idx => &mut self.$idx, )+
                    _ => unreachable!("index past the declaration set"),
                }
            }

            fn into_values(self) -> ParseResult<Self::Values> {
                Ok(($( self.$idx.finish()?, )+))
            }
        }
    };
}

option_set_tuple!(A => 0);
option_set_tuple!(A => 0, B => 1);
option_set_tuple!(A => 0, B => 1, C => 2);
option_set_tuple!(A => 0, B => 1, C => 2, D => 3);
option_set_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4);
option_set_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5);
option_set_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6);
option_set_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7);
option_set_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8);
option_set_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8, J => 9);
option_set_tuple!(
    A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8, J => 9, K => 10
);
option_set_tuple!(
    A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8, J => 9, K => 10,
    L => 11
);
