//! codec/encode.rs
//!
//! Typed value → SerializedDocument.
//!
//! Design notes:
//! - Walks the registry in declaration order; output key order equals it.
//! - Text, bool and integer pass through; timestamps use the configured format.
//! - Pure and infallible: accessors are total.

use crate::codec::types::{CodecConfig, Keyed};
use crate::document::{Scalar, SerializedDocument};
use crate::registry::{FieldRegistry, FieldValue};

/// Encode `value` through its own registry.
pub fn encode<T: Keyed>(value: &T, config: &CodecConfig) -> SerializedDocument {
    encode_with(T::registry(), value, config)
}

/// Encode `value` through an explicit registry.
pub fn encode_with<T>(registry: &FieldRegistry<T>, value: &T, config: &CodecConfig) -> SerializedDocument {
    let mut doc = SerializedDocument::with_capacity(registry.len());
    for field in registry.iter() {
        let typed = field.get(value);
        debug_assert_eq!(typed.kind(), field.kind(), "getter for `{}` returned wrong kind", field.key());
        doc.insert(field.key().clone(), to_scalar(typed, config));
    }
    doc
}

/// Scalar-specific conversion rule.
pub fn to_scalar(value: FieldValue, config: &CodecConfig) -> Scalar {
    match value {
        FieldValue::Text(s)       => Scalar::Text(s),
        FieldValue::Bool(b)       => Scalar::Bool(b),
        FieldValue::Integer(n)    => Scalar::Integer(n),
        FieldValue::Timestamp(ts) => config.timestamps.format(&ts),
    }
}
