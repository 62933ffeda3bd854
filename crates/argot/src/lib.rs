//! Compile-time-typed command-line argument parsing.
//!
//! Declare a fixed set of options with their value types, hand the parser an
//! already-materialized argument vector (first token = program name), and get
//! the values back as a typed tuple in declaration order:
//!
//! ```
//! use argot::{Parser, arg, flag};
//!
//! let parser = Parser::new((
//!     arg::<u32>("count", 'n', "how many times to run"),
//!     flag("verbose", 'v', "enable verbose output"),
//! ))?;
//!
//! let argv: Vec<String> = ["prog", "--count=3", "--verbose", "input.txt"]
//!     .into_iter()
//!     .map(String::from)
//!     .collect();
//!
//! let parsed = parser.parse(&argv)?;
//! let (count, verbose) = parsed.values;
//! assert_eq!(count, 3);
//! assert!(verbose);
//! assert_eq!(parsed.rest, ["input.txt"]);
//! # Ok::<(), argot::ParseError>(())
//! ```
//!
//! Every declared value-taking option is required; supplying an option twice
//! keeps the last occurrence. Errors are returned, never printed: rendering
//! and process exit belong to the entry point that owns the parse. Help text
//! is stored, not rendered; [`Parser::describe`] hands a serializable
//! snapshot to whatever renders usage output.

mod convert;
mod error;
mod option;
mod parser;
mod registry;

pub use convert::{Unrepresentable, from_text, to_text};
pub use error::{ParseError, ParseResult};
pub use option::{Declared, Flag, Opt, OptionSet, Valued, arg, flag};
pub use parser::{Parsed, Parser};

pub use argot_meta::{OptionMeta, OptionMetadataV1};
