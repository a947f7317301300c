#![forbid(unsafe_code)]

//! Raw field values as they arrive from form inputs.
//!
//! Browser inputs hand over strings, numeric inputs hand over numbers, and a
//! field the user never filled in has no value at all. [`FieldValue`] keeps
//! those three cases apart so validators can tell "missing" from "empty".

use std::borrow::Cow;
use std::fmt;

/// A single raw form value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    /// The field has no value (never set, or explicitly cleared).
    #[default]
    Missing,
    /// Text typed by the user.
    Text(String),
    /// A numeric input.
    Number(f64),
}

impl FieldValue {
    /// Create a text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a numeric value.
    #[must_use]
    pub fn number(value: impl Into<f64>) -> Self {
        Self::Number(value.into())
    }

    /// Returns `true` if the field has no value.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns `true` if the value is missing or the empty string.
    ///
    /// Whitespace-only text is *not* empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Text(s) => s.is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Text view of the value. Missing reads as `""`.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Missing => Cow::Borrowed(""),
            Self::Text(s) => Cow::Borrowed(s),
            Self::Number(n) => Cow::Owned(n.to_string()),
        }
    }

    /// Read the value as an integer.
    ///
    /// Text is parsed by its leading integer: leading whitespace and an
    /// optional sign are accepted, parsing stops at the first non-digit.
    /// Numbers truncate toward zero. Returns `None` when no integer can be
    /// read (missing, non-numeric text, NaN or infinite numbers).
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Missing => None,
            Self::Text(s) => parse_leading_int(s),
            Self::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            Self::Number(_) => None,
        }
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    seen.then_some(if negative { -value } else { value })
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}
