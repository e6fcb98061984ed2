//! employee/record.rs
//! Mutable, identity-bearing Employee representation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use chrono::{DateTime, Utc};

use crate::codec::{DecodeError, FieldSet, Keyed};
use crate::constants::employee_keys::{HIRE_DATE, IS_FULL_TIME, NAME};
use crate::registry::{FieldRegistry, RegistryError};

static NEXT_RECORD_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an `EmployeeRecord`. Never serialized.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    fn next() -> Self {
        Self(NEXT_RECORD_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record#{}", self.0)
    }
}

/// Reference record: every instance has its own identity, fields are
/// updated in place. Not `Clone`; copy the data out with [`crate::employee::Employee::from`].
#[derive(Debug)]
pub struct EmployeeRecord {
    id: RecordId,
    name: String,
    is_full_time: bool,
    hire_date: DateTime<Utc>,
}

impl EmployeeRecord {
    /// Defaulting constructor: full time, hired now.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, None, None)
    }

    /// Defaulting constructor with optional overrides.
    /// - `is_full_time`: `None` → `true`
    /// - `hire_date`: `None` → `Utc::now()`
    pub fn with_options(
        name: impl Into<String>,
        is_full_time: Option<bool>,
        hire_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: RecordId::next(),
            name: name.into(),
            is_full_time: is_full_time.unwrap_or(true),
            hire_date: hire_date.unwrap_or_else(Utc::now),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_full_time(&self) -> bool {
        self.is_full_time
    }

    pub fn hire_date(&self) -> DateTime<Utc> {
        self.hire_date
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_full_time(&mut self, is_full_time: bool) {
        self.is_full_time = is_full_time;
    }

    pub fn set_hire_date(&mut self, hire_date: DateTime<Utc>) {
        self.hire_date = hire_date;
    }

    /// Field-wise equality, ignoring identity.
    pub fn same_fields(&self, other: &EmployeeRecord) -> bool {
        self.name == other.name && self.is_full_time == other.is_full_time && self.hire_date == other.hire_date
    }

    fn declare() -> Result<FieldRegistry<Self>, RegistryError> {
        FieldRegistry::<Self>::named("EmployeeRecord")
            .text(NAME, |e| e.name.clone(), |e, v| e.name = v)?
            .boolean(IS_FULL_TIME, |e| e.is_full_time, |e, v| e.is_full_time = v)?
            .timestamp(HIRE_DATE, |e| e.hire_date, |e, v| e.hire_date = v)
    }
}

impl Keyed for EmployeeRecord {
    fn registry() -> &'static FieldRegistry<Self> {
        static REGISTRY: OnceLock<FieldRegistry<EmployeeRecord>> = OnceLock::new();
        REGISTRY.get_or_init(|| EmployeeRecord::declare().expect("EmployeeRecord registry keys are unique"))
    }

    /// Strict constructor: a decoded record is a new identity.
    fn from_fields(mut fields: FieldSet) -> Result<Self, DecodeError> {
        Ok(Self {
            id: RecordId::next(),
            name: fields.take_text(NAME)?,
            is_full_time: fields.take_bool(IS_FULL_TIME)?,
            hire_date: fields.take_timestamp(HIRE_DATE)?,
        })
    }
}
