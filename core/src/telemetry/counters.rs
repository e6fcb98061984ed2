//! telemetry/counters.rs
//! Mutable counters collected while a pipeline runs.
//!
//! Converted into an immutable `TelemetrySnapshot` at the end.

use serde::{Deserialize, Serialize};

use crate::document::SerializedDocument;

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecCounters {
    pub documents_encoded: u64,
    pub documents_decoded: u64,
    pub fields_encoded: u64,
    pub fields_decoded: u64,
    pub bytes_written: u64,
    pub bytes_read: u64,
}

impl CodecCounters {
    /// Record documents produced by encode.
    pub fn add_encoded(&mut self, docs: &[SerializedDocument]) {
        self.documents_encoded += docs.len() as u64;
        self.fields_encoded += docs.iter().map(|d| d.len() as u64).sum::<u64>();
    }

    /// Record documents consumed by a successful decode.
    /// - `fields_per_document`: declared field count of the target type
    pub fn add_decoded(&mut self, documents: usize, fields_per_document: usize) {
        self.documents_decoded += documents as u64;
        self.fields_decoded += (documents * fields_per_document) as u64;
    }

    pub fn add_written(&mut self, bytes: usize) {
        self.bytes_written += bytes as u64;
    }

    pub fn add_read(&mut self, bytes: usize) {
        self.bytes_read += bytes as u64;
    }

    pub fn documents(&self) -> u64 {
        self.documents_encoded + self.documents_decoded
    }
}
