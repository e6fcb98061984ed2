use thiserror::Error;

use crate::{
    batch::BatchError,
    codec::DecodeError,
    registry::RegistryError,
    wire::{ParseError, WireError},
};

/// Unified codec error covering registration, decode, batch and wire failures.
/// - `From<T>` impls enable `?` across the pipeline.
/// - Messages are stable and contextual for logs.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Registry declaration or lookup failure.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Single-document decode failure.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Batch decode failure (carries the failing index).
    #[error("batch error: {0}")]
    Batch(#[from] BatchError),

    /// Malformed wire bytes.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Document serialization failure.
    #[error("wire error: {0}")]
    Wire(WireError),
}

impl From<WireError> for CodecError {
    fn from(e: WireError) -> Self {
        // Parse failures keep their own variant.
        match e {
            WireError::Parse(p) => CodecError::Parse(p),
            other => CodecError::Wire(other),
        }
    }
}
