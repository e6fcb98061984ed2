//! codec/decode.rs
//!
//! SerializedDocument → typed value.
//!
//! Design notes:
//! - Every declared field is looked up and kind-checked before any value of
//!   `T` exists. Decode is all-or-nothing.
//! - Keys the registry does not declare are ignored.
//! - First failing field in registration order is the one reported.

use crate::codec::field_set::FieldSet;
use crate::codec::types::{CodecConfig, DecodeError, Keyed};
use crate::document::{Scalar, SerializedDocument, TimestampError};
use crate::registry::{FieldKey, FieldKind, FieldRegistry, FieldValue};

/// Decode a document into a new `T` via its strict constructor.
pub fn decode<T: Keyed>(doc: &SerializedDocument, config: &CodecConfig) -> Result<T, DecodeError> {
    let fields = collect_fields(T::registry(), doc, config)?;
    T::from_fields(fields)
}

/// Decode a document onto an existing `T` through the registry setters.
///
/// The whole document is validated first; on error `target` is untouched.
pub fn decode_into<T: Keyed>(target: &mut T, doc: &SerializedDocument, config: &CodecConfig) -> Result<(), DecodeError> {
    let registry = T::registry();
    let fields = collect_fields(registry, doc, config)?;
    // `collect_fields` yields one value per field, in registry order, already
    // converted to `field.kind()`; the typed setters cannot reject any of them.
    debug_assert!(registry.iter().zip(fields.iter()).all(|(f, (_, v))| f.kind() == v.kind()));
    for (field, (_, value)) in registry.iter().zip(fields) {
        field.set(target, value)?;
    }
    Ok(())
}

/// Read and convert every declared field of `registry` from `doc`.
pub fn collect_fields<T>(
    registry: &FieldRegistry<T>,
    doc: &SerializedDocument,
    config: &CodecConfig,
) -> Result<FieldSet, DecodeError> {
    let mut fields = FieldSet::with_capacity(registry.len());
    for field in registry.iter() {
        let key = field.key();
        let scalar = doc.get(key.as_str()).ok_or_else(|| DecodeError::MissingField { key: key.clone() })?;
        fields.insert(key.clone(), from_scalar(key, field.kind(), scalar, config)?);
    }
    Ok(fields)
}

/// Convert one scalar to the field's semantic type.
pub fn from_scalar(
    key: &FieldKey,
    kind: FieldKind,
    scalar: &Scalar,
    config: &CodecConfig,
) -> Result<FieldValue, DecodeError> {
    let mismatch = || DecodeError::TypeMismatch { key: key.clone(), expected: kind, found: scalar.kind() };

    match kind {
        FieldKind::Text    => scalar.as_text().map(|s| FieldValue::Text(s.to_string())).ok_or_else(mismatch),
        FieldKind::Bool    => scalar.as_bool().map(FieldValue::Bool).ok_or_else(mismatch),
        FieldKind::Integer => scalar.as_integer().map(FieldValue::Integer).ok_or_else(mismatch),
        FieldKind::Timestamp => match config.timestamps.parse(scalar) {
            Ok(ts) => Ok(FieldValue::Timestamp(ts)),
            Err(TimestampError::Kind { .. }) => Err(mismatch()),
            Err(TimestampError::Format { raw }) => Err(DecodeError::TimestampFormat { key: key.clone(), raw }),
        },
    }
}
