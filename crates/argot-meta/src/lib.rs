//! Option metadata model and encoding for argot help renderers.
//!
//! The parser stores help text but never renders usage output; an external
//! collaborator does. This crate carries the data such a renderer needs,
//! decoupled from the parser's own declaration types so renderers don't pull
//! in the parsing machinery.

use serde::{Deserialize, Serialize};

/// One declared option, as a help renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct OptionMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help: String,
    #[serde(default)]
    pub takes_value: bool,
}

/// Versioned JSON payload handed to out-of-process help renderers.
///
/// Options appear in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OptionMetadataV1 {
    pub format_version: u32,
    pub options: Vec<OptionMeta>,
}

impl OptionMetadataV1 {
    pub fn new(options: Vec<OptionMeta>) -> Self {
        Self {
            format_version: 1,
            options,
        }
    }

    /// Encode as JSON bytes for handing to a renderer.
    ///
    /// The structure is stable across versions; the whitespace is not.
    pub fn to_json_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }
}
