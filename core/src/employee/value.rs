//! employee/value.rs
//! Plain value Employee representation.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};

use crate::codec::{DecodeError, FieldSet, Keyed};
use crate::constants::employee_keys::{HIRE_DATE, IS_FULL_TIME, NAME};
use crate::employee::record::EmployeeRecord;
use crate::registry::{FieldRegistry, RegistryError};

/// Value record. No defaults; every field is given at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Employee {
    pub name: String,
    pub is_full_time: bool,
    pub hire_date: DateTime<Utc>,
}

impl Employee {
    pub fn new(name: impl Into<String>, is_full_time: bool, hire_date: DateTime<Utc>) -> Self {
        Self { name: name.into(), is_full_time, hire_date }
    }

    fn declare() -> Result<FieldRegistry<Self>, RegistryError> {
        FieldRegistry::<Self>::named("Employee")
            .text(NAME, |e| e.name.clone(), |e, v| e.name = v)?
            .boolean(IS_FULL_TIME, |e| e.is_full_time, |e, v| e.is_full_time = v)?
            .timestamp(HIRE_DATE, |e| e.hire_date, |e, v| e.hire_date = v)
    }
}

/// Copy the data out of a reference record.
impl From<&EmployeeRecord> for Employee {
    fn from(record: &EmployeeRecord) -> Self {
        Self {
            name: record.name().to_string(),
            is_full_time: record.is_full_time(),
            hire_date: record.hire_date(),
        }
    }
}

impl Keyed for Employee {
    fn registry() -> &'static FieldRegistry<Self> {
        static REGISTRY: OnceLock<FieldRegistry<Employee>> = OnceLock::new();
        REGISTRY.get_or_init(|| Employee::declare().expect("Employee registry keys are unique"))
    }

    fn from_fields(mut fields: FieldSet) -> Result<Self, DecodeError> {
        Ok(Self {
            name: fields.take_text(NAME)?,
            is_full_time: fields.take_bool(IS_FULL_TIME)?,
            hire_date: fields.take_timestamp(HIRE_DATE)?,
        })
    }
}
