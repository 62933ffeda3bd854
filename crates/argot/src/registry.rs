//! Long-name and short-alias lookup tables.

use std::collections::HashMap;

use crate::error::{ParseError, ParseResult};
use crate::option::OptionSet;

/// Lookup tables mapping option names to positions in the declaration set.
///
/// Built once at parser construction; the tables never change afterwards.
/// Storing positions instead of references keeps the declaration set owned by
/// the parser while both tables point at the same declarations.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    long: HashMap<String, usize>,
    short: HashMap<char, usize>,
}

impl Registry {
    /// Index every declaration, in declaration order.
    ///
    /// Fails when two declarations claim the same long name or short alias.
    pub(crate) fn build<S: OptionSet>(set: &S) -> ParseResult<Self> {
        let mut registry = Self::default();
        for index in 0..set.len() {
            let decl = set.get(index);
            if registry.long.insert(decl.name().to_string(), index).is_some() {
                return Err(ParseError::DuplicateOption {
                    option: format!("--{}", decl.name()),
                });
            }
            if let Some(alias) = decl.short() {
                if registry.short.insert(alias, index).is_some() {
                    return Err(ParseError::DuplicateOption {
                        option: format!("-{alias}"),
                    });
                }
            }
        }
        Ok(registry)
    }

    pub(crate) fn resolve_long(&self, name: &str) -> Option<usize> {
        self.long.get(name).copied()
    }

    pub(crate) fn resolve_short(&self, alias: char) -> Option<usize> {
        self.short.get(&alias).copied()
    }
}
