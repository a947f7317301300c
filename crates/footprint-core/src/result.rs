#![forbid(unsafe_code)]

//! Validation results, errors, and password strength.

use std::collections::HashMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Error Codes (for i18n lookup)
// ---------------------------------------------------------------------------

/// A required value is missing or blank.
pub const ERROR_CODE_REQUIRED: &str = "required";
/// The value is shorter than allowed.
pub const ERROR_CODE_TOO_SHORT: &str = "too_short";
/// The value is longer than allowed.
pub const ERROR_CODE_TOO_LONG: &str = "too_long";
/// The value is not a well-formed email address.
pub const ERROR_CODE_EMAIL: &str = "email";
/// The password does not mix enough character classes.
pub const ERROR_CODE_WEAK_PASSWORD: &str = "weak_password";
/// A name contains characters outside the allowed set.
pub const ERROR_CODE_NAME_CHARS: &str = "name_chars";
/// The value cannot be read as a number.
pub const ERROR_CODE_NOT_A_NUMBER: &str = "not_a_number";
/// The age is below the service minimum.
pub const ERROR_CODE_TOO_YOUNG: &str = "too_young";
/// The number is outside the plausible range.
pub const ERROR_CODE_OUT_OF_RANGE: &str = "out_of_range";
/// The confirmation was left empty.
pub const ERROR_CODE_CONFIRM_REQUIRED: &str = "confirm_required";
/// The confirmation does not match the original.
pub const ERROR_CODE_MISMATCH: &str = "mismatch";

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// A validation error with code, message, and interpolation parameters.
///
/// The `code` field is a stable identifier for i18n systems.
/// The `message` field is a human-readable default message.
/// The `params` field contains key-value pairs for message interpolation.
///
/// # Example
///
/// ```rust
/// use footprint_core::ValidationError;
///
/// let error = ValidationError::new("too_short", "{label} must be at least {min} characters long")
///     .with_param("label", "First name")
///     .with_param("min", 2);
///
/// assert_eq!(error.format_message(), "First name must be at least 2 characters long");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable error code for programmatic handling and i18n.
    pub code: &'static str,
    /// Human-readable error message template.
    pub message: String,
    /// Parameters for message interpolation.
    pub params: HashMap<String, String>,
}

impl ValidationError {
    /// Create a new validation error with the given code and message.
    #[must_use]
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            params: HashMap::new(),
        }
    }

    /// Add a parameter for message interpolation.
    ///
    /// Parameters are substituted in the message using `{key}` syntax.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    /// Format the message with parameter substitution.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut result = self.message.clone();
        for (key, value) in &self.params {
            result = result.replace(&format!("{{{key}}}"), value);
        }
        result
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_message())
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// Strength
// ---------------------------------------------------------------------------

/// Password strength label.
///
/// Strength describes how many character classes a password mixes. It is
/// not a verdict: a `Medium` password still fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strength {
    /// No password was given.
    #[default]
    None,
    /// Class score of 2 or less, or a length failure.
    Weak,
    /// Class score of 3. Still below the validity threshold.
    Medium,
    /// Class score of 4 or more.
    Strong,
}

impl Strength {
    /// Map a class score (0..=5) to a label.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3 => Self::Medium,
            _ => Self::Strong,
        }
    }

    /// Lowercase label, as shown next to a password meter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// The result of a validation operation.
///
/// Every validator call produces a fresh result. Only the password
/// validator attaches a [`Strength`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    error: Option<ValidationError>,
    strength: Option<Strength>,
}

impl ValidationResult {
    /// A passing result.
    #[must_use]
    pub fn valid() -> Self {
        Self::default()
    }

    /// A failing result with the given error.
    #[must_use]
    pub fn invalid(error: ValidationError) -> Self {
        Self {
            error: Some(error),
            strength: None,
        }
    }

    /// Attach a password strength label.
    #[must_use]
    pub fn with_strength(mut self, strength: Strength) -> Self {
        self.strength = Some(strength);
        self
    }

    /// Returns `true` if the value passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Returns `true` if the value failed.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    /// Returns the error if the result is invalid.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Display message: the formatted error, or `""` when valid.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.error
            .as_ref()
            .map(ValidationError::format_message)
            .unwrap_or_default()
    }

    /// Password strength, if this result came from the password validator.
    #[must_use]
    pub fn strength(&self) -> Option<Strength> {
        self.strength
    }

    /// Combine two results, returning the first failure if any.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        if self.is_valid() { other } else { self }
    }
}

impl From<ValidationError> for ValidationResult {
    fn from(error: ValidationError) -> Self {
        Self::invalid(error)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_format_multiple_params() {
        let err = ValidationError::new("test", "{label} must be less than {max}")
            .with_param("label", "Name")
            .with_param("max", 50);
        assert_eq!(err.format_message(), "Name must be less than 50");
    }

    #[test]
    fn validation_error_display() {
        let err = ValidationError::new("test", "Hello {who}").with_param("who", "there");
        assert_eq!(format!("{err}"), "Hello there");
    }

    #[test]
    fn valid_result_has_empty_message() {
        let r = ValidationResult::valid();
        assert!(r.is_valid());
        assert!(r.error().is_none());
        assert_eq!(r.error_message(), "");
        assert_eq!(r.strength(), None);
    }

    #[test]
    fn invalid_result_exposes_error() {
        let r = ValidationResult::invalid(ValidationError::new(ERROR_CODE_REQUIRED, "Required"));
        assert!(r.is_invalid());
        assert_eq!(r.error().map(|e| e.code), Some(ERROR_CODE_REQUIRED));
        assert_eq!(r.error_message(), "Required");
    }

    #[test]
    fn and_keeps_first_failure() {
        let valid = ValidationResult::valid();
        let a = ValidationResult::invalid(ValidationError::new("a", "A"));
        let b = ValidationResult::invalid(ValidationError::new("b", "B"));

        assert!(valid.clone().and(valid.clone()).is_valid());
        assert_eq!(valid.clone().and(b.clone()).error_message(), "B");
        assert_eq!(a.clone().and(b).error_message(), "A");
        assert_eq!(a.and(valid).error_message(), "A");
    }

    #[test]
    fn strength_from_score() {
        assert_eq!(Strength::from_score(0), Strength::Weak);
        assert_eq!(Strength::from_score(2), Strength::Weak);
        assert_eq!(Strength::from_score(3), Strength::Medium);
        assert_eq!(Strength::from_score(4), Strength::Strong);
        assert_eq!(Strength::from_score(5), Strength::Strong);
    }

    #[test]
    fn strength_ordering_and_labels() {
        assert!(Strength::None < Strength::Weak);
        assert!(Strength::Medium < Strength::Strong);
        assert_eq!(Strength::Medium.to_string(), "medium");
        assert_eq!(Strength::default(), Strength::None);
    }
}
