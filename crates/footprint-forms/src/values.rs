#![forbid(unsafe_code)]

//! The record of field values a form submits.

use std::collections::HashMap;

use footprint_core::FieldValue;

static MISSING: FieldValue = FieldValue::Missing;

/// Field values keyed by field name.
///
/// Reading a field that was never set yields [`FieldValue::Missing`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FormValues {
    values: HashMap<String, FieldValue>,
}

impl FormValues {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, builder style.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a field, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(field.into(), value.into());
    }

    /// Remove a field, returning its previous value.
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.values.remove(field)
    }

    /// Value of `field`, or `Missing` if it was never set.
    #[must_use]
    pub fn get(&self, field: &str) -> &FieldValue {
        self.values.get(field).unwrap_or(&MISSING)
    }

    /// Returns `true` if `field` has been set (even to `Missing`).
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Number of fields set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no field has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(field, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
