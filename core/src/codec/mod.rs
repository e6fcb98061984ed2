//! codec/mod.rs
//! Codec engine: keyed encode/decode between typed values and documents.
//!
//! Responsibilities:
//! - Encode a value through its registry, in declaration order
//! - Decode a document with presence and kind checks on every declared field
//!
//! Non-responsibilities:
//! - Bytes and wire syntax (see `wire`)
//! - Collections (see `batch`)

pub mod types;
pub mod field_set;
pub mod encode;
pub mod decode;

pub use types::*;
pub use field_set::FieldSet;
pub use encode::*;
pub use decode::*;
