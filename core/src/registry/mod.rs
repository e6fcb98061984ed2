//! registry/mod.rs
//! Field registry: per-type declaration of serializable fields.
//!
//! Notes:
//! - Each representation type owns its own registry, even when two types model
//!   the same concept. Registries are never merged.
//! - Keys are unique per registry; duplicates fail at registration.

pub mod types;
#[allow(clippy::module_inception)]
pub mod registry;

pub use types::*;
pub use registry::*;
