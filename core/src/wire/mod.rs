//! Wire adapter for serialized documents.
//!
//! Responsibilities:
//! - Encode documents into UTF-8 JSON
//! - Decode JSON with strict scalar validation and positioned errors
//!
//! Non-responsibilities:
//! - Field kinds and registries
//! - Timestamp parsing
//! - IO

pub mod types;
pub mod json;

pub use types::{ParseCategory, ParseError, WireConfig, WireError};
pub use json::{document_from_bytes, document_to_bytes, from_bytes, to_bytes};
