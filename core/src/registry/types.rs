//! registry/types.rs
//! Field keys, semantic kinds and typed field values.
//!
//! Design notes:
//! - A `FieldKey` is the stable wire name, independent of the Rust field name.
//! - `FieldKind` is what the registry promises; `FieldValue` is what a getter yields.
//! - Values are converted to wire scalars by the codec, never by the registry.

use std::borrow::{Borrow, Cow};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable string identifier of one serializable field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey(Cow<'static, str>);

impl FieldKey {
    /// Key backed by a static string (registry declarations).
    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for FieldKey {
    fn from(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }
}

impl From<String> for FieldKey {
    fn from(key: String) -> Self {
        Self(Cow::Owned(key))
    }
}

impl Borrow<str> for FieldKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FieldKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FieldKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FieldKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Semantic type a registered field carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Bool,
    Integer,
    Timestamp,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text      => "text",
            FieldKind::Bool      => "bool",
            FieldKind::Integer   => "integer",
            FieldKind::Timestamp => "timestamp",
        };
        f.write_str(name)
    }
}

/// Typed value read from, or written to, a registered field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Integer(i64),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_)      => FieldKind::Text,
            FieldValue::Bool(_)      => FieldKind::Bool,
            FieldValue::Integer(_)   => FieldKind::Integer,
            FieldValue::Timestamp(_) => FieldKind::Timestamp,
        }
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(v: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(v)
    }
}

/// Registration and lookup failures. These are programmer errors and
/// surface at declaration time, not during encode/decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The same key was registered twice for one type.
    #[error("duplicate key `{key}` in registry for {type_name}")]
    DuplicateKey { type_name: &'static str, key: FieldKey },

    /// Lookup of a key the type never declared.
    #[error("unknown key `{key}` in registry for {type_name}")]
    UnknownKey { type_name: &'static str, key: String },
}
