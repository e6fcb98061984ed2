//! codec/types.rs
//! Codec configuration, decode errors and the `Keyed` binding trait.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::field_set::FieldSet;
use crate::document::{ScalarKind, TimestampFormat};
use crate::registry::{FieldKey, FieldKind, FieldRegistry};
use crate::utils::truncate_for_display;

/// A type with a registered field layout and a strict from-document constructor.
///
/// `from_fields` only ever receives a complete, kind-checked [`FieldSet`];
/// it is kept separate from any defaulting constructor the type offers.
pub trait Keyed: Sized + 'static {
    /// The type's registry, built once and never mutated.
    fn registry() -> &'static FieldRegistry<Self>;

    /// Build a value from every declared field.
    fn from_fields(fields: FieldSet) -> Result<Self, DecodeError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Wire form of timestamp fields (encode and decode must agree).
    pub timestamps: TimestampFormat,
}

impl CodecConfig {
    pub fn new(timestamps: Option<TimestampFormat>) -> Self {
        Self { timestamps: timestamps.unwrap_or_default() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A declared key is absent from the document.
    #[error("missing field `{key}`")]
    MissingField { key: FieldKey },

    /// The scalar present under `key` cannot hold the declared kind.
    #[error("type mismatch for `{key}`: expected {expected}, found {found}")]
    TypeMismatch { key: FieldKey, expected: FieldKind, found: ScalarKind },

    /// Timestamp text or number that does not parse in the configured format.
    #[error("bad timestamp for `{key}`: {}", truncate_for_display(raw))]
    TimestampFormat { key: FieldKey, raw: String },

    /// A setter or strict constructor received a value of the wrong kind.
    #[error("value kind mismatch for `{key}`: expected {expected}, found {found}")]
    ValueKindMismatch { key: FieldKey, expected: FieldKind, found: FieldKind },
}

impl DecodeError {
    /// Key of the field that failed.
    pub fn key(&self) -> &FieldKey {
        match self {
            DecodeError::MissingField { key }
            | DecodeError::TypeMismatch { key, .. }
            | DecodeError::TimestampFormat { key, .. }
            | DecodeError::ValueKindMismatch { key, .. } => key,
        }
    }
}
