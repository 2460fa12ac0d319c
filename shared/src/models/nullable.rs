use serde::{Deserialize, Deserializer};
use std::fmt;

/// One field of a sparse update payload.
///
/// Combined with `#[serde(default)]`, a key missing from the JSON object stays
/// `NotPresent`, a JSON `null` becomes `Null` and anything else `Value`.
#[derive(Debug, Clone, PartialEq)]
pub enum NullableField<T> {
    NotPresent,
    Null,
    Value(T),
}

impl<T> Default for NullableField<T> {
    fn default() -> Self {
        NullableField::NotPresent
    }
}

impl<T> NullableField<T> {
    pub fn was_present(&self) -> bool {
        !matches!(self, NullableField::NotPresent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, NullableField::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            NullableField::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            NullableField::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> NullableField<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            NullableField::NotPresent => NullableField::NotPresent,
            NullableField::Null => NullableField::Null,
            NullableField::Value(v) => NullableField::Value(f(v)),
        }
    }
}

impl<T> From<T> for NullableField<T> {
    fn from(value: T) -> Self {
        NullableField::Value(value)
    }
}

impl<'de, T> Deserialize<'de> for NullableField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only called when the key is present
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => NullableField::Value(value),
            None => NullableField::Null,
        })
    }
}

impl<T: fmt::Debug> fmt::Display for NullableField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NullableField::Null => write!(f, "null"),
            NullableField::Value(v) => write!(f, "{:?}", v),
            NullableField::NotPresent => write!(f, "[not present]"),
        }
    }
}
