//! wire/types.rs
//! Wire configuration and boundary errors.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output formatting for the JSON wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireConfig {
    /// Indented, multi-line output.
    /// - `None` or `Some(false)` → compact (default).
    pub pretty: Option<bool>,

    /// Emit each object's keys in lexicographic order instead of registry order.
    /// - `None` or `Some(false)` → registry order (default).
    pub sorted_keys: Option<bool>,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            pretty: Some(false),
            sorted_keys: Some(false),
        }
    }
}

impl WireConfig {
    pub fn new(pretty: Option<bool>, sorted_keys: Option<bool>) -> Self {
        Self {
            pretty: pretty.or(Some(false)),
            sorted_keys: sorted_keys.or(Some(false)),
        }
    }

    pub fn pretty() -> Self {
        Self { pretty: Some(true), sorted_keys: Some(false) }
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty.unwrap_or(false)
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted_keys.unwrap_or(false)
    }
}

/// Kind of wire failure, as classified by the JSON parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCategory {
    /// Not syntactically valid JSON.
    Syntax,
    /// Valid JSON of the wrong shape (e.g. nested object where a scalar belongs).
    Data,
    /// Input ended mid-value.
    Eof,
    Io,
}

impl fmt::Display for ParseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseCategory::Syntax => "syntax",
            ParseCategory::Data   => "data",
            ParseCategory::Eof    => "eof",
            ParseCategory::Io     => "io",
        };
        f.write_str(name)
    }
}

/// Malformed wire bytes, with 1-based line/column of the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{category} error at line {line} column {column}: {message}")]
pub struct ParseError {
    pub category: ParseCategory,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        use serde_json::error::Category;
        let category = match e.classify() {
            Category::Syntax => ParseCategory::Syntax,
            Category::Data   => ParseCategory::Data,
            Category::Eof    => ParseCategory::Eof,
            Category::Io     => ParseCategory::Io,
        };
        Self {
            category,
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum WireError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Writing documents out failed.
    #[error("serialize failed: {0}")]
    Serialize(#[source] serde_json::Error),
}
