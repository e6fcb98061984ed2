//! employee/mod.rs
//! Two representations of one logical Employee, each with its own registry.
//!
//! - `EmployeeRecord`: mutable, identity-bearing, defaulting constructor.
//! - `Employee`: plain value, built by copying from a record.
//!
//! Both declare `name`, `isFullTime`, `hireDate` in that order, so equal data
//! encodes to identical documents.

pub mod record;
pub mod value;

pub use record::{EmployeeRecord, RecordId};
pub use value::Employee;
