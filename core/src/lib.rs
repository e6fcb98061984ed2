//! keyed-codec-core
//!
//! Typed keyed serialization engine.
//! Per-type field registries, a keyed document codec, batch drivers and a
//! JSON boundary adapter.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Core layers
pub mod registry;
pub mod document;
pub mod codec;
pub mod batch;
pub mod wire;
pub mod telemetry;

// Public API
pub mod pipeline;

// Sample entity representations
pub mod employee;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::batch::{decode_all, encode_all, BatchError, ParallelismProfile};
    pub use crate::codec::{decode, decode_into, encode, CodecConfig, DecodeError, FieldSet, Keyed};
    pub use crate::document::{Scalar, ScalarKind, SerializedDocument, TimestampFormat};
    pub use crate::pipeline::{decode_records, encode_records, ApiConfig, PipelineOutput};
    pub use crate::registry::{FieldKey, FieldKind, FieldRegistry, FieldValue, RegistryError};
    pub use crate::types::CodecError;
    pub use crate::wire::{from_bytes, to_bytes, ParseError, WireConfig};
}
