//! Single-pass tokenizer and typed result assembly.

use argot_meta::OptionMeta;

use crate::error::{ParseError, ParseResult};
use crate::option::{Opt, OptionSet};
use crate::registry::Registry;

/// Everything recovered from one argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<V> {
    /// The first input token; never classified as an option or positional.
    pub program: String,
    /// Final option values, in declaration order.
    pub values: V,
    /// Positional tokens, in input order.
    pub rest: Vec<String>,
}

/// A declaration set bound to its lookup tables.
///
/// Each parser owns its declarations and registry, so concurrent parses on
/// independent instances need no synchronization.
#[derive(Debug)]
pub struct Parser<S> {
    opts: S,
    registry: Registry,
}

impl<S: OptionSet> Parser<S> {
    /// Register `opts`, building the long-name and short-alias tables.
    ///
    /// Fails with [`ParseError::DuplicateOption`] when two declarations claim
    /// the same name or alias.
    pub fn new(opts: S) -> ParseResult<Self> {
        let registry = Registry::build(&opts)?;
        Ok(Self { opts, registry })
    }

    /// Describe the declaration set for an external help renderer.
    pub fn describe(&self) -> Vec<OptionMeta> {
        (0..self.opts.len())
            .map(|index| {
                let decl = self.opts.get(index);
                OptionMeta {
                    name: decl.name().to_string(),
                    short: decl.short(),
                    help: decl.help().to_string(),
                    takes_value: decl.takes_value(),
                }
            })
            .collect()
    }

    /// Walk `argv` left to right, then drain the declarations into their
    /// typed values.
    ///
    /// The first token is the program name. Consumes the parser: declarations
    /// hold parse state, so a fresh set is required for another input vector.
    pub fn parse(mut self, argv: &[String]) -> ParseResult<Parsed<S::Values>> {
        let Some(program) = argv.first() else {
            return Err(ParseError::EmptyInput);
        };
        tracing::debug!("parsing {} argument tokens", argv.len() - 1);

        let mut rest = Vec::new();
        let mut tokens = argv[1..].iter();
        while let Some(token) = tokens.next() {
            if let Some(body) = token.strip_prefix("--") {
                if let Some((key, value)) = body.split_once('=') {
                    // --key=value
                    let index = self.resolve_long(key)?;
                    let decl = self.opts.get_mut(index);
                    if decl.takes_value() {
                        decl.assign(value)?;
                    } else {
                        tracing::debug!("discarding inline value for flag --{key}");
                        decl.trigger();
                    }
                } else {
                    // --key, value (if any) in the next token
                    let index = self.resolve_long(body)?;
                    dispatch(self.opts.get_mut(index), token, &mut tokens)?;
                }
            } else if let Some(alias) = short_alias(token) {
                // -c, value (if any) in the next token
                let index = self.resolve_short(alias)?;
                dispatch(self.opts.get_mut(index), token, &mut tokens)?;
            } else {
                rest.push(token.clone());
            }
        }

        let values = self.opts.into_values()?;
        Ok(Parsed {
            program: program.clone(),
            values,
            rest,
        })
    }

    fn resolve_long(&self, key: &str) -> ParseResult<usize> {
        self.registry
            .resolve_long(key)
            .ok_or_else(|| ParseError::UnknownOption {
                token: format!("--{key}"),
            })
    }

    fn resolve_short(&self, alias: char) -> ParseResult<usize> {
        self.registry
            .resolve_short(alias)
            .ok_or_else(|| ParseError::UnknownOption {
                token: format!("-{alias}"),
            })
    }
}

/// Assign the next token to a value-taking option, or trigger a flag.
fn dispatch(
    decl: &mut dyn Opt,
    token: &str,
    tokens: &mut std::slice::Iter<'_, String>,
) -> ParseResult<()> {
    if decl.takes_value() {
        let value = tokens.next().ok_or_else(|| ParseError::MissingValue {
            option: token.to_string(),
        })?;
        decl.assign(value)
    } else {
        decl.trigger();
        Ok(())
    }
}

/// Short options are a single dash followed by at least one more character.
///
/// The alias is the second character; anything after it is ignored. A bare
/// `-` is a positional.
fn short_alias(token: &str) -> Option<char> {
    let mut chars = token.chars();
    if chars.next() != Some('-') {
        return None;
    }
    chars.next()
}
