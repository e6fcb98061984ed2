//! document/mod.rs
//! Serialized documents: the intermediate form between typed values and bytes.

pub mod types;
pub mod timestamp;

pub use types::*;
pub use timestamp::*;
