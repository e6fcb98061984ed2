//! batch/driver.rs
//! Sequential encode/decode over ordered collections.

use tracing::{debug, warn};

use crate::batch::types::BatchError;
use crate::codec::{decode, encode, CodecConfig, Keyed};
use crate::document::SerializedDocument;

/// One document per value, in input order.
pub fn encode_all<T: Keyed>(values: &[T], config: &CodecConfig) -> Vec<SerializedDocument> {
    debug!(items = values.len(), "encode_all");
    values.iter().map(|v| encode(v, config)).collect()
}

/// Decode every document or none.
///
/// # Errors
/// `BatchError` naming the first failing index; nothing decoded is returned.
pub fn decode_all<T: Keyed>(docs: &[SerializedDocument], config: &CodecConfig) -> Result<Vec<T>, BatchError> {
    debug!(items = docs.len(), "decode_all");
    docs.iter()
        .enumerate()
        .map(|(index, doc)| decode(doc, config).map_err(|source| BatchError { index, source }))
        .collect::<Result<Vec<T>, BatchError>>()
        .inspect_err(|e| warn!(index = e.index, error = %e.source, "batch decode failed"))
}
