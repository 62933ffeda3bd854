//! Typed failure surface for registry construction and parsing.
//!
//! Every failure is raised synchronously from `Parser::new` or
//! `Parser::parse`; the library never prints or terminates the process.
//! What to do with a failed parse belongs to the entry point that owns it.

use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The argument vector was empty. The first token is always the program
    /// name, so at least one token is required.
    #[error("argument vector must contain at least the program name")]
    EmptyInput,

    /// A token referenced an option that was never declared.
    #[error("unknown flag: {token}")]
    UnknownOption { token: String },

    /// Two declarations claimed the same long name or short alias.
    #[error("arg definition conflict: duplicate option {option}")]
    DuplicateOption { option: String },

    /// A value-taking option sat at the end of input with no token left to
    /// consume as its value.
    #[error("missing value for {option}")]
    MissingValue { option: String },

    /// The raw text could not be read as the declared value type.
    #[error("invalid value '{value}' for {option}: expected {wanted}")]
    Conversion {
        option: String,
        value: String,
        wanted: &'static str,
    },

    /// A value-taking option was declared but never supplied. Every declared
    /// valued option is required.
    #[error("missing required argument: {option}")]
    MissingRequired { option: String },
}
