//! codec/field_set.rs
//! Validated typed values handed to a strict constructor.

use chrono::{DateTime, Utc};

use crate::codec::types::DecodeError;
use crate::registry::{FieldKey, FieldKind, FieldValue};

/// Ordered typed field values, one per declared key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSet {
    values: Vec<(FieldKey, FieldValue)>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { values: Vec::with_capacity(capacity) }
    }

    /// Insert or replace the value for `key`.
    pub fn insert(&mut self, key: impl Into<FieldKey>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.values.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Remove and return the value for `key`.
    pub fn take(&mut self, key: &str) -> Result<FieldValue, DecodeError> {
        let pos = self
            .values
            .iter()
            .position(|(k, _)| *k == key)
            .ok_or_else(|| DecodeError::MissingField { key: FieldKey::from(key.to_string()) })?;
        Ok(self.values.remove(pos).1)
    }

    pub fn take_text(&mut self, key: &str) -> Result<String, DecodeError> {
        match self.take(key)? {
            FieldValue::Text(s) => Ok(s),
            other => Err(mismatch(key, FieldKind::Text, &other)),
        }
    }

    pub fn take_bool(&mut self, key: &str) -> Result<bool, DecodeError> {
        match self.take(key)? {
            FieldValue::Bool(b) => Ok(b),
            other => Err(mismatch(key, FieldKind::Bool, &other)),
        }
    }

    pub fn take_integer(&mut self, key: &str) -> Result<i64, DecodeError> {
        match self.take(key)? {
            FieldValue::Integer(n) => Ok(n),
            other => Err(mismatch(key, FieldKind::Integer, &other)),
        }
    }

    pub fn take_timestamp(&mut self, key: &str) -> Result<DateTime<Utc>, DecodeError> {
        match self.take(key)? {
            FieldValue::Timestamp(ts) => Ok(ts),
            other => Err(mismatch(key, FieldKind::Timestamp, &other)),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k, v))
    }
}

impl IntoIterator for FieldSet {
    type Item = (FieldKey, FieldValue);
    type IntoIter = std::vec::IntoIter<(FieldKey, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

fn mismatch(key: &str, expected: FieldKind, found: &FieldValue) -> DecodeError {
    DecodeError::ValueKindMismatch {
        key: FieldKey::from(key.to_string()),
        expected,
        found: found.kind(),
    }
}
