//! batch/mod.rs
//! Batch driver: encode/decode mapped over ordered collections.
//!
//! - Items are independent; no cross-item invariants.
//! - Decode is atomic per call: a full `Vec<T>` or the first failing index.

pub mod types;
pub mod driver;
pub mod parallel;

pub use types::*;
pub use driver::*;
pub use parallel::*;
