//! constants.rs
//! Wire keys, display bounds and batch defaults shared across layers.

/// Stable keys of the Employee wire contract.
/// Both representations register exactly these, in this order.
pub mod employee_keys {
    pub const NAME: &str = "name";
    pub const IS_FULL_TIME: &str = "isFullTime";
    pub const HIRE_DATE: &str = "hireDate";

    pub const ALL: [&str; 3] = [NAME, IS_FULL_TIME, HIRE_DATE];
}

/// Max characters of a raw scalar echoed back in error messages.
pub const MAX_RAW_DISPLAY_LEN: usize = 100;

/// Below this many items the parallel driver runs sequentially.
pub const MIN_PARALLEL_BATCH: usize = 2;

/// Default bound on queued jobs per worker in the parallel driver.
pub const DEFAULT_INFLIGHT_PER_WORKER: usize = 4;

/// Hard cap on parallel workers regardless of core count.
pub const MAX_WORKERS: usize = 64;
