#![allow(dead_code)]

use std::sync::OnceLock;

use chrono::{DateTime, TimeZone, Utc};
use keyed_codec::codec::{DecodeError, FieldSet, Keyed};
use keyed_codec::employee::{Employee, EmployeeRecord};
use keyed_codec::registry::FieldRegistry;

/// 2024-03-14T09:26:53.589Z
pub fn t0() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(1_710_408_413_589).unwrap()
}

pub fn john_snow() -> Employee {
    Employee::new("John Snow", true, t0())
}

pub fn john_snow_record() -> EmployeeRecord {
    EmployeeRecord::with_options("John Snow", None, Some(t0()))
}

pub fn staff(n: usize) -> Vec<Employee> {
    (0..n)
        .map(|i| Employee::new(format!("employee-{i}"), i % 2 == 0, t0() + chrono::Duration::seconds(i as i64)))
        .collect()
}

/// Second keyed type with an integer field and its own key order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub number: i64,
    pub label: String,
    pub issued: DateTime<Utc>,
}

impl Keyed for Badge {
    fn registry() -> &'static FieldRegistry<Self> {
        static REGISTRY: OnceLock<FieldRegistry<Badge>> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            FieldRegistry::<Badge>::named("Badge")
                .integer("badge_no", |b| b.number, |b, v| b.number = v)
                .and_then(|r| r.text("label", |b| b.label.clone(), |b, v| b.label = v))
                .and_then(|r| r.timestamp("issued_at", |b| b.issued, |b, v| b.issued = v))
                .unwrap()
        })
    }

    fn from_fields(mut fields: FieldSet) -> Result<Self, DecodeError> {
        Ok(Self {
            number: fields.take_integer("badge_no")?,
            label: fields.take_text("label")?,
            issued: fields.take_timestamp("issued_at")?,
        })
    }
}
