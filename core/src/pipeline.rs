//! pipeline.rs
//! Stable public API.
//!
//! values → batch encode → documents → wire bytes, and back.
//! Each call returns its output together with a telemetry snapshot.

use tracing::{debug, info};

use crate::batch::{decode_all_parallel, encode_all_parallel, ParallelismProfile};
use crate::codec::{CodecConfig, Keyed};
use crate::constants::MAX_WORKERS;
use crate::telemetry::{CodecCounters, Stage, TelemetrySnapshot, TelemetryTimer};
use crate::types::CodecError;
use crate::wire::{from_bytes, to_bytes, WireConfig};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub codec: CodecConfig,
    pub wire: WireConfig,

    /// Whether to run the batch step on a worker pool.
    /// - `None` or `Some(false)` → sequential (default).
    /// - `Some(true)` → parallel with `profile`.
    pub parallel: Option<bool>,

    pub profile: ParallelismProfile,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            codec: CodecConfig::default(),
            wire: WireConfig::default(),
            parallel: Some(false),
            profile: ParallelismProfile::single_threaded(),
        }
    }
}

impl ApiConfig {
    pub fn new(codec: Option<CodecConfig>, wire: Option<WireConfig>, parallel: Option<bool>) -> Self {
        let parallel = parallel.or(Some(false));
        let profile = if parallel == Some(true) {
            ParallelismProfile::dynamic(MAX_WORKERS)
        } else {
            ParallelismProfile::single_threaded()
        };
        Self {
            codec: codec.unwrap_or_default(),
            wire: wire.unwrap_or_default(),
            parallel,
            profile,
        }
    }

    pub fn parallel_enabled() -> Self {
        Self::new(None, None, Some(true))
    }

    /// Profile the batch step actually uses.
    fn effective_profile(&self) -> ParallelismProfile {
        if self.parallel.unwrap_or(false) {
            self.profile.clone()
        } else {
            ParallelismProfile::single_threaded()
        }
    }
}

/// Output of a pipeline call plus its telemetry.
#[derive(Debug, Clone)]
pub struct PipelineOutput<O> {
    pub output: O,
    pub telemetry: TelemetrySnapshot,
}

/// Encode `values` and serialize them as one wire array.
pub fn encode_records<T: Keyed + Sync>(values: &[T], config: &ApiConfig) -> Result<PipelineOutput<Vec<u8>>, CodecError> {
    let profile = config.effective_profile();
    let mut counters = CodecCounters::default();
    let mut timer = TelemetryTimer::new();

    let docs = timer.time(Stage::Encode, || encode_all_parallel(values, &config.codec, &profile));
    counters.add_encoded(&docs);

    let bytes = timer.time(Stage::Serialize, || to_bytes(&docs, &config.wire))?;
    counters.add_written(bytes.len());
    timer.finish();

    info!(
        type_name = T::registry().type_name(),
        documents = docs.len(),
        bytes = bytes.len(),
        "encoded records"
    );

    Ok(PipelineOutput {
        output: bytes,
        telemetry: TelemetrySnapshot::from(&counters, &timer),
    })
}

/// Parse a wire array and decode every element as `T`.
///
/// # Errors
/// - `CodecError::Parse` for malformed bytes
/// - `CodecError::Batch` naming the first document that failed to decode
pub fn decode_records<T: Keyed + Send>(bytes: &[u8], config: &ApiConfig) -> Result<PipelineOutput<Vec<T>>, CodecError> {
    let profile = config.effective_profile();
    let mut counters = CodecCounters::default();
    let mut timer = TelemetryTimer::new();
    counters.add_read(bytes.len());

    let docs = timer.time(Stage::Parse, || from_bytes(bytes))?;
    debug!(documents = docs.len(), "parsed wire array");

    let values = timer.time(Stage::Decode, || decode_all_parallel::<T>(&docs, &config.codec, &profile))?;
    counters.add_decoded(values.len(), T::registry().len());
    timer.finish();

    info!(
        type_name = T::registry().type_name(),
        documents = values.len(),
        "decoded records"
    );

    Ok(PipelineOutput {
        output: values,
        telemetry: TelemetrySnapshot::from(&counters, &timer),
    })
}
