//! registry/registry.rs
//! Per-type ordered field registry and accessor pairs.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::codec::DecodeError;
use crate::registry::types::{FieldKey, FieldKind, FieldValue, RegistryError};

type Getter<T> = Box<dyn Fn(&T) -> FieldValue + Send + Sync>;
type Setter<T> = Box<dyn Fn(&mut T, FieldValue) -> Result<(), DecodeError> + Send + Sync>;

/// One registered field: its key, semantic kind and get/set pair.
pub struct FieldAccessor<T> {
    key: FieldKey,
    kind: FieldKind,
    get: Getter<T>,
    set: Setter<T>,
}

impl<T> FieldAccessor<T> {
    pub fn key(&self) -> &FieldKey {
        &self.key
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Read the field from `value`. Getters are total.
    pub fn get(&self, value: &T) -> FieldValue {
        (self.get)(value)
    }

    /// Write a typed value into `target`.
    pub fn set(&self, target: &mut T, value: FieldValue) -> Result<(), DecodeError> {
        (self.set)(target, value)
    }
}

impl<T> fmt::Debug for FieldAccessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Ordered declaration of which fields of `T` serialize and how.
///
/// - Registration order is serialization order (not sorted).
/// - Immutable once built; shared as `&'static` through [`crate::codec::Keyed`].
/// - `Send + Sync`, so concurrent reads need no locking.
pub struct FieldRegistry<T> {
    type_name: &'static str,
    fields: Vec<FieldAccessor<T>>,
}

impl<T: 'static> FieldRegistry<T> {
    /// Empty registry labelled with the Rust type name.
    pub fn new() -> Self {
        Self::named(std::any::type_name::<T>())
    }

    /// Empty registry with an explicit label for error messages.
    pub fn named(type_name: &'static str) -> Self {
        Self { type_name, fields: Vec::new() }
    }

    /// Register a field with an explicit kind and accessor pair.
    ///
    /// # Errors
    /// `RegistryError::DuplicateKey` if `key` is already declared for this type.
    pub fn register<G, S>(
        mut self,
        key: impl Into<FieldKey>,
        kind: FieldKind,
        get: G,
        set: S,
    ) -> Result<Self, RegistryError>
    where
        G: Fn(&T) -> FieldValue + Send + Sync + 'static,
        S: Fn(&mut T, FieldValue) -> Result<(), DecodeError> + Send + Sync + 'static,
    {
        let key = key.into();
        if self.fields.iter().any(|f| f.key == key) {
            return Err(RegistryError::DuplicateKey { type_name: self.type_name, key });
        }
        self.fields.push(FieldAccessor { key, kind, get: Box::new(get), set: Box::new(set) });
        Ok(self)
    }

    pub fn text(
        self,
        key: impl Into<FieldKey>,
        get: fn(&T) -> String,
        set: fn(&mut T, String),
    ) -> Result<Self, RegistryError> {
        let key = key.into();
        let owned = key.clone();
        self.register(key, FieldKind::Text, move |t| FieldValue::Text(get(t)), move |t, v| match v {
            FieldValue::Text(s) => {
                set(t, s);
                Ok(())
            }
            other => Err(setter_mismatch(&owned, FieldKind::Text, &other)),
        })
    }

    pub fn boolean(
        self,
        key: impl Into<FieldKey>,
        get: fn(&T) -> bool,
        set: fn(&mut T, bool),
    ) -> Result<Self, RegistryError> {
        let key = key.into();
        let owned = key.clone();
        self.register(key, FieldKind::Bool, move |t| FieldValue::Bool(get(t)), move |t, v| match v {
            FieldValue::Bool(b) => {
                set(t, b);
                Ok(())
            }
            other => Err(setter_mismatch(&owned, FieldKind::Bool, &other)),
        })
    }

    pub fn integer(
        self,
        key: impl Into<FieldKey>,
        get: fn(&T) -> i64,
        set: fn(&mut T, i64),
    ) -> Result<Self, RegistryError> {
        let key = key.into();
        let owned = key.clone();
        self.register(key, FieldKind::Integer, move |t| FieldValue::Integer(get(t)), move |t, v| match v {
            FieldValue::Integer(n) => {
                set(t, n);
                Ok(())
            }
            other => Err(setter_mismatch(&owned, FieldKind::Integer, &other)),
        })
    }

    pub fn timestamp(
        self,
        key: impl Into<FieldKey>,
        get: fn(&T) -> DateTime<Utc>,
        set: fn(&mut T, DateTime<Utc>),
    ) -> Result<Self, RegistryError> {
        let key = key.into();
        let owned = key.clone();
        self.register(key, FieldKind::Timestamp, move |t| FieldValue::Timestamp(get(t)), move |t, v| match v {
            FieldValue::Timestamp(ts) => {
                set(t, ts);
                Ok(())
            }
            other => Err(setter_mismatch(&owned, FieldKind::Timestamp, &other)),
        })
    }
}

impl<T: 'static> Default for FieldRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FieldRegistry<T> {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Look up one field by key.
    ///
    /// # Errors
    /// `RegistryError::UnknownKey` if the type never declared `key`.
    pub fn field(&self, key: &str) -> Result<&FieldAccessor<T>, RegistryError> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .ok_or_else(|| RegistryError::UnknownKey {
                type_name: self.type_name,
                key: key.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|f| f.key == key)
    }

    /// Declared fields in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldAccessor<T>> {
        self.fields.iter()
    }

    /// Declared keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &FieldKey> {
        self.fields.iter().map(|f| &f.key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> fmt::Debug for FieldRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRegistry")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .finish()
    }
}

fn setter_mismatch(key: &FieldKey, expected: FieldKind, found: &FieldValue) -> DecodeError {
    DecodeError::ValueKindMismatch { key: key.clone(), expected, found: found.kind() }
}
