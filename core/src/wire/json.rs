//! wire/json.rs
//!
//! SerializedDocument(s) ↔ UTF-8 JSON bytes.
//!
//! Design notes:
//! - A batch is a JSON array of objects; each object keeps document order.
//! - Only strings, booleans and integers are accepted as field values.
//! - The codec never sees bytes; this is the only layer that does.

use tracing::{debug, warn};

use crate::document::SerializedDocument;
use crate::wire::types::{ParseError, WireConfig, WireError};

/// Serialize documents as a JSON array.
pub fn to_bytes(docs: &[SerializedDocument], config: &WireConfig) -> Result<Vec<u8>, WireError> {
    let bytes = if config.is_sorted() {
        let sorted: Vec<SerializedDocument> = docs.iter().map(SerializedDocument::sorted_by_key).collect();
        write_json(&sorted, config)?
    } else {
        write_json(docs, config)?
    };
    debug!(documents = docs.len(), bytes = bytes.len(), "to_bytes");
    Ok(bytes)
}

/// Parse a JSON array of documents.
///
/// # Errors
/// `ParseError` with line/column for malformed input or non-scalar values.
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<SerializedDocument>, ParseError> {
    serde_json::from_slice::<Vec<SerializedDocument>>(bytes)
        .map_err(ParseError::from)
        .inspect(|docs| debug!(documents = docs.len(), bytes = bytes.len(), "from_bytes"))
        .inspect_err(|e| warn!(line = e.line, column = e.column, "from_bytes failed: {}", e.message))
}

/// Serialize a single document as a JSON object.
pub fn document_to_bytes(doc: &SerializedDocument, config: &WireConfig) -> Result<Vec<u8>, WireError> {
    if config.is_sorted() {
        write_json(&doc.sorted_by_key(), config)
    } else {
        write_json(doc, config)
    }
}

/// Parse a single JSON object.
pub fn document_from_bytes(bytes: &[u8]) -> Result<SerializedDocument, ParseError> {
    serde_json::from_slice::<SerializedDocument>(bytes).map_err(ParseError::from)
}

fn write_json<S: serde::Serialize + ?Sized>(value: &S, config: &WireConfig) -> Result<Vec<u8>, WireError> {
    let out = if config.is_pretty() {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    };
    out.map_err(WireError::Serialize)
}
