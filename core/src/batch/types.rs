use thiserror::Error;

use crate::codec::DecodeError;
use crate::constants::{DEFAULT_INFLIGHT_PER_WORKER, MAX_WORKERS};

/// A batch decode failed at `index`; no items are returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("item {index} failed: {source}")]
pub struct BatchError {
    pub index: usize,
    #[source]
    pub source: DecodeError,
}

/// Parallelism configuration for the batch driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelismProfile {
    pub worker_count: usize,
    /// Max jobs queued ahead of the workers.
    pub inflight: usize,
}

impl ParallelismProfile {
    pub fn single_threaded() -> Self {
        Self {
            worker_count: 1,
            inflight: 1,
        }
    }

    pub fn fixed(worker_count: usize) -> Self {
        let worker_count = worker_count.clamp(1, MAX_WORKERS);
        Self {
            worker_count,
            inflight: worker_count * DEFAULT_INFLIGHT_PER_WORKER,
        }
    }

    /// Size from the host: one worker per core, leaving one core free.
    pub fn dynamic(hard_cap: usize) -> Self {
        let cores = num_cpus::get();
        let worker_count = cores.saturating_sub(1).max(1).min(hard_cap.max(1));
        Self::fixed(worker_count)
    }

    pub fn is_sequential(&self) -> bool {
        self.worker_count <= 1
    }
}

impl Default for ParallelismProfile {
    fn default() -> Self {
        Self::single_threaded()
    }
}
