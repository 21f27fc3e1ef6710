//! Compilation and printing options.
//!
//! Options deserialize from TOML or JSON with camelCase keys; every key is
//! optional and falls back to its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use docscript_doc::PrintOptions;

/// Whether numeric literals are accepted as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LiteralPolicy {
    /// Only non-empty string literals.
    #[default]
    StringsOnly,
    /// Numbers too, printed the way JavaScript converts them to strings.
    AllowNumbers,
}

/// Which builder names the DSL accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Vocabulary {
    /// The core builder set.
    #[default]
    Standard,
    /// The core set plus `align(n, doc)` and `trim`.
    Extended,
}

/// Options for [`evaluate`](crate::evaluate) and [`compile`](crate::compile).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Options {
    pub print_width: usize,
    pub tab_width: usize,
    pub use_tabs: bool,
    pub literal_policy: LiteralPolicy,
    pub vocabulary: Vocabulary,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            print_width: 80,
            tab_width: 2,
            use_tabs: false,
            literal_policy: LiteralPolicy::default(),
            vocabulary: Vocabulary::default(),
        }
    }
}

/// Failure to read options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Failed to parse options: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Failed to parse options: {0}")]
    Json(#[from] serde_json::Error),
}

impl Options {
    /// Parse options from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Options, OptionsError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse options from a JSON object.
    pub fn from_json_str(content: &str) -> Result<Options, OptionsError> {
        Ok(serde_json::from_str(content)?)
    }
}

impl From<&Options> for PrintOptions {
    fn from(options: &Options) -> Self {
        PrintOptions {
            print_width: options.print_width,
            tab_width: options.tab_width,
            use_tabs: options.use_tabs,
        }
    }
}
