#![forbid(unsafe_code)]

//! Built-in field validators.
//!
//! Each validator is available two ways: as a free function taking the raw
//! input (handy for one-off checks), and as a type implementing
//! [`Validator`] so it can be stored and run through a uniform interface.
//!
//! All validators are total. Malformed input is a failing result, never a
//! panic or an `Err`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::result::{
    ERROR_CODE_CONFIRM_REQUIRED, ERROR_CODE_EMAIL, ERROR_CODE_MISMATCH, ERROR_CODE_NAME_CHARS,
    ERROR_CODE_NOT_A_NUMBER, ERROR_CODE_OUT_OF_RANGE, ERROR_CODE_REQUIRED, ERROR_CODE_TOO_LONG,
    ERROR_CODE_TOO_SHORT, ERROR_CODE_TOO_YOUNG, ERROR_CODE_WEAK_PASSWORD, Strength,
    ValidationError, ValidationResult,
};
use crate::value::FieldValue;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Minimum password length in characters.
pub const PASSWORD_MIN_LEN: usize = 8;
/// Maximum password length in characters.
pub const PASSWORD_MAX_LEN: usize = 128;
/// Length at which a password earns the length bonus.
pub const PASSWORD_BONUS_LEN: usize = 12;
/// Class score a password needs to pass.
pub const PASSWORD_MIN_SCORE: u8 = 4;
/// Symbols counted as the "special character" class.
pub const PASSWORD_SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Minimum trimmed name length.
pub const NAME_MIN_LEN: usize = 2;
/// Maximum trimmed name length.
pub const NAME_MAX_LEN: usize = 50;
/// Label used when a name field does not supply one.
pub const DEFAULT_NAME_LABEL: &str = "Name";

/// Youngest age allowed to use the service.
pub const MIN_AGE: i64 = 13;
/// Oldest plausible age.
pub const MAX_AGE: i64 = 120;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

// ---------------------------------------------------------------------------
// Validator Trait
// ---------------------------------------------------------------------------

/// A trait for validating values of type `T`.
///
/// # Implementing a Custom Validator
///
/// ```rust
/// use footprint_core::{FieldValue, Validator, ValidationResult, ValidationError};
///
/// struct Postcode;
///
/// impl Validator for Postcode {
///     fn validate(&self, value: &FieldValue) -> ValidationResult {
///         if value.as_text().chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
///             ValidationResult::valid()
///         } else {
///             ValidationResult::invalid(ValidationError::new("postcode", "Invalid postcode"))
///         }
///     }
///
///     fn error_message(&self) -> &str {
///         "Invalid postcode"
///     }
/// }
///
/// assert!(Postcode.validate(&"SW1A 1AA".into()).is_valid());
/// ```
pub trait Validator<T: ?Sized = FieldValue>: Send + Sync {
    /// Validate the given value.
    fn validate(&self, value: &T) -> ValidationResult;

    /// Return the default error message for this validator.
    fn error_message(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Validate an email address.
#[must_use]
pub fn email(value: &str) -> ValidationResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid(ValidationError::new(
            ERROR_CODE_REQUIRED,
            "Email is required",
        ));
    }

    if !EMAIL_RE.is_match(trimmed) {
        return ValidationResult::invalid(ValidationError::new(
            ERROR_CODE_EMAIL,
            "Please enter a valid email address",
        ));
    }

    ValidationResult::valid()
}

/// Count the character classes a password mixes, plus the length bonus.
///
/// Classes: lowercase, uppercase, digit, symbol from [`PASSWORD_SYMBOLS`].
/// The result is in `0..=5`.
#[must_use]
pub fn password_score(value: &str) -> u8 {
    let checks = [
        value.chars().any(|c| c.is_ascii_lowercase()),
        value.chars().any(|c| c.is_ascii_uppercase()),
        value.chars().any(|c| c.is_ascii_digit()),
        value.chars().any(|c| PASSWORD_SYMBOLS.contains(c)),
        value.chars().count() >= PASSWORD_BONUS_LEN,
    ];
    checks.iter().filter(|&&hit| hit).count() as u8
}

/// Validate a password and rate its strength.
///
/// Strength is reported on every non-empty result. Validity requires a
/// score of at least [`PASSWORD_MIN_SCORE`], so a `Medium` password fails.
#[must_use]
pub fn password(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::invalid(ValidationError::new(
            ERROR_CODE_REQUIRED,
            "Password is required",
        ))
        .with_strength(Strength::None);
    }

    let len = value.chars().count();
    if len < PASSWORD_MIN_LEN {
        return ValidationResult::invalid(
            ValidationError::new(
                ERROR_CODE_TOO_SHORT,
                "Password must be at least {min} characters long",
            )
            .with_param("min", PASSWORD_MIN_LEN)
            .with_param("actual", len),
        )
        .with_strength(Strength::Weak);
    }

    if len > PASSWORD_MAX_LEN {
        return ValidationResult::invalid(
            ValidationError::new(
                ERROR_CODE_TOO_LONG,
                "Password must be less than {max} characters",
            )
            .with_param("max", PASSWORD_MAX_LEN)
            .with_param("actual", len),
        )
        .with_strength(Strength::Weak);
    }

    let score = password_score(value);
    let strength = Strength::from_score(score);
    crate::trace!(score, strength = %strength, "password scored");

    if score < PASSWORD_MIN_SCORE {
        return ValidationResult::invalid(
            ValidationError::new(
                ERROR_CODE_WEAK_PASSWORD,
                "Password must contain uppercase, lowercase, numbers, and special characters",
            )
            .with_param("score", score),
        )
        .with_strength(strength);
    }

    ValidationResult::valid().with_strength(strength)
}

/// Validate a person's name. `label` names the field in messages.
#[must_use]
pub fn name(value: &str, label: &str) -> ValidationResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid(
            ValidationError::new(ERROR_CODE_REQUIRED, "{label} is required")
                .with_param("label", label),
        );
    }

    let len = trimmed.chars().count();
    if len < NAME_MIN_LEN {
        return ValidationResult::invalid(
            ValidationError::new(
                ERROR_CODE_TOO_SHORT,
                "{label} must be at least {min} characters long",
            )
            .with_param("label", label)
            .with_param("min", NAME_MIN_LEN)
            .with_param("actual", len),
        );
    }

    if len > NAME_MAX_LEN {
        return ValidationResult::invalid(
            ValidationError::new(
                ERROR_CODE_TOO_LONG,
                "{label} must be less than {max} characters long",
            )
            .with_param("label", label)
            .with_param("max", NAME_MAX_LEN)
            .with_param("actual", len),
        );
    }

    let allowed = |c: char| c.is_ascii_alphabetic() || c.is_whitespace() || c == '-' || c == '\'';
    if !trimmed.chars().all(allowed) {
        return ValidationResult::invalid(
            ValidationError::new(
                ERROR_CODE_NAME_CHARS,
                "{label} can only contain letters, spaces, hyphens, and apostrophes",
            )
            .with_param("label", label),
        );
    }

    ValidationResult::valid()
}

/// Validate an age, given as a number or as text.
#[must_use]
pub fn age(value: &FieldValue) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::invalid(ValidationError::new(
            ERROR_CODE_REQUIRED,
            "Age is required",
        ));
    }

    let Some(years) = value.as_integer() else {
        return ValidationResult::invalid(ValidationError::new(
            ERROR_CODE_NOT_A_NUMBER,
            "Age must be a valid number",
        ));
    };

    if years < MIN_AGE {
        return ValidationResult::invalid(
            ValidationError::new(
                ERROR_CODE_TOO_YOUNG,
                "You must be at least {min} years old to use this service",
            )
            .with_param("min", MIN_AGE),
        );
    }

    if years > MAX_AGE {
        return ValidationResult::invalid(
            ValidationError::new(ERROR_CODE_OUT_OF_RANGE, "Please enter a valid age")
                .with_param("max", MAX_AGE),
        );
    }

    ValidationResult::valid()
}

/// Check that a password confirmation matches the original.
#[must_use]
pub fn confirm_password(original: &str, confirmation: &str) -> ValidationResult {
    if confirmation.is_empty() {
        return ValidationResult::invalid(ValidationError::new(
            ERROR_CODE_CONFIRM_REQUIRED,
            "Please confirm your password",
        ));
    }

    if original != confirmation {
        return ValidationResult::invalid(ValidationError::new(
            ERROR_CODE_MISMATCH,
            "Passwords do not match",
        ));
    }

    ValidationResult::valid()
}

/// Require any non-empty value. Whitespace-only text counts as a value.
#[must_use]
pub fn required(value: &FieldValue, label: &str) -> ValidationResult {
    if value.is_empty() {
        ValidationResult::invalid(
            ValidationError::new(ERROR_CODE_REQUIRED, "{label} is required")
                .with_param("label", label),
        )
    } else {
        ValidationResult::valid()
    }
}

// ---------------------------------------------------------------------------
// Built-in Validators
// ---------------------------------------------------------------------------

/// Validates an email address. See [`email`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl Validator for Email {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        email(&value.as_text())
    }

    fn error_message(&self) -> &str {
        "Please enter a valid email address"
    }
}

/// Validates and rates a password. See [`password`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Password;

impl Validator for Password {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        password(&value.as_text())
    }

    fn error_message(&self) -> &str {
        "Password must contain uppercase, lowercase, numbers, and special characters"
    }
}

/// Validates a person's name. See [`name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    label: String,
    message: String,
}

impl Name {
    /// Create a name validator labelled `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let message =
            format!("{label} can only contain letters, spaces, hyphens, and apostrophes");
        Self { label, message }
    }

    /// Field label used in messages.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::new(DEFAULT_NAME_LABEL)
    }
}

impl Validator for Name {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        name(&value.as_text(), &self.label)
    }

    /// The character-set message, with the label filled in.
    fn error_message(&self) -> &str {
        &self.message
    }
}

/// Validates an age. See [`age`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Age;

impl Validator for Age {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        age(value)
    }

    fn error_message(&self) -> &str {
        "Please enter a valid age"
    }
}

/// Requires a non-empty value. See [`required`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Required {
    label: String,
    message: String,
}

impl Required {
    /// Create a required-value validator labelled `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let message = format!("{label} is required");
        Self { label, message }
    }

    /// Field label used in messages.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Validator for Required {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        required(value, &self.label)
    }

    fn error_message(&self) -> &str {
        &self.message
    }
}

/// Checks a confirmation against a known original. See [`confirm_password`].
#[derive(Clone, PartialEq, Eq)]
pub struct ConfirmPassword {
    original: String,
}

impl ConfirmPassword {
    /// Create a validator that expects `original`.
    #[must_use]
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
        }
    }
}

impl fmt::Debug for ConfirmPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmPassword")
            .field("original", &"<redacted>")
            .finish()
    }
}

impl Validator for ConfirmPassword {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        confirm_password(&self.original, &value.as_text())
    }

    fn error_message(&self) -> &str {
        "Passwords do not match"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
