#![forbid(unsafe_code)]

//! Field rules: built-in validators, predicates, and sequences.
//!
//! A [`Rule`] is resolved when it is constructed. Looking a validator up by
//! name either yields a [`Builtin`] or fails with a [`RuleError`] right away,
//! so evaluation never meets a rule it cannot run.

use std::fmt;
use std::sync::Arc;

use footprint_core::validators::{self, DEFAULT_NAME_LABEL};
use footprint_core::{FieldValue, ValidationResult, Validator};

use crate::values::FormValues;

/// Label used by the `required` validator when none is given.
pub const DEFAULT_REQUIRED_LABEL: &str = "This field";

/// Signature of a predicate rule: the field's value plus the whole form.
pub type PredicateFn = dyn Fn(&FieldValue, &FormValues) -> ValidationResult + Send + Sync;

// ---------------------------------------------------------------------------
// RuleError
// ---------------------------------------------------------------------------

/// Errors raised while building rules and rule sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// No built-in validator has this name.
    UnknownValidator {
        /// The name that failed to resolve.
        name: String,
    },
    /// A built-in validator needs an option that was not supplied.
    MissingOption {
        /// Name of the validator being resolved.
        validator: &'static str,
        /// The option it cannot resolve without.
        option: &'static str,
    },
    /// A sequence rule was given no entries.
    EmptySequence,
    /// The same field appears twice in one rule set.
    DuplicateField {
        /// The repeated field name.
        field: String,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownValidator { name } => write!(f, "unknown validator '{name}'"),
            Self::MissingOption { validator, option } => {
                write!(f, "validator '{validator}' requires option '{option}'")
            }
            Self::EmptySequence => f.write_str("rule sequence is empty"),
            Self::DuplicateField { field } => {
                write!(f, "field '{field}' has more than one rule")
            }
        }
    }
}

impl std::error::Error for RuleError {}

// ---------------------------------------------------------------------------
// Builtin
// ---------------------------------------------------------------------------

/// A built-in validator, with the options it was resolved with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Builtin {
    /// Well-formed email address.
    Email,
    /// Password length and character-class policy.
    Password,
    /// Personal name; `label` leads every message.
    Name { label: String },
    /// Whole-year age within the accepted range.
    Age,
    /// Non-blank value; `label` leads the message.
    Required { label: String },
    /// Password confirmation checked against another field of the form.
    Matches { field: String },
}

impl Builtin {
    /// Names accepted by [`Builtin::from_name`].
    pub const NAMES: [&'static str; 6] = [
        "email",
        "password",
        "name",
        "age",
        "required",
        "confirmPassword",
    ];

    /// Resolve a validator name.
    ///
    /// `label` customizes messages for `name` and `required`; `field` names
    /// the original field for `confirmPassword`, which cannot resolve without
    /// it.
    pub fn from_name(
        name: &str,
        label: Option<&str>,
        field: Option<&str>,
    ) -> Result<Self, RuleError> {
        let builtin = match name {
            "email" => Self::Email,
            "password" => Self::Password,
            "age" => Self::Age,
            "name" => Self::Name {
                label: label.unwrap_or(DEFAULT_NAME_LABEL).to_string(),
            },
            "required" => Self::Required {
                label: label.unwrap_or(DEFAULT_REQUIRED_LABEL).to_string(),
            },
            "confirmPassword" => Self::Matches {
                field: field
                    .ok_or(RuleError::MissingOption {
                        validator: "confirmPassword",
                        option: "field",
                    })?
                    .to_string(),
            },
            other => {
                return Err(RuleError::UnknownValidator {
                    name: other.to_string(),
                });
            }
        };
        tracing::trace!(name, "resolved built-in validator");
        Ok(builtin)
    }

    /// Run the validator against `value`, reading other fields from `form`.
    #[must_use]
    pub fn evaluate(&self, value: &FieldValue, form: &FormValues) -> ValidationResult {
        match self {
            Self::Email => validators::email(&value.as_text()),
            Self::Password => validators::password(&value.as_text()),
            Self::Name { label } => validators::name(&value.as_text(), label),
            Self::Age => validators::age(value),
            Self::Required { label } => validators::required(value, label),
            Self::Matches { field } => {
                validators::confirm_password(&form.get(field).as_text(), &value.as_text())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// How one field is validated.
#[derive(Clone)]
pub enum Rule {
    /// A built-in validator.
    Builtin(Builtin),
    /// A caller-supplied predicate.
    Predicate(Arc<PredicateFn>),
    /// Rules run left to right; the first failure stops the sequence.
    Sequence(RuleSequence),
}

/// The non-empty entries of a [`Rule::Sequence`].
///
/// Only [`Rule::sequence`] creates one, so a sequence always has at least
/// one rule to run.
#[derive(Debug, Clone)]
pub struct RuleSequence {
    rules: Vec<Rule>,
}

impl RuleSequence {
    /// The entries, in evaluation order. Never empty.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Rule {
    /// Resolve a built-in validator by name.
    ///
    /// ```rust
    /// use footprint_forms::Rule;
    ///
    /// assert!(Rule::named("email").is_ok());
    /// assert!(Rule::named("emial").is_err());
    /// ```
    pub fn named(name: &str) -> Result<Self, RuleError> {
        Builtin::from_name(name, None, None).map(Self::Builtin)
    }

    /// The built-in email validator.
    #[must_use]
    pub fn email() -> Self {
        Self::Builtin(Builtin::Email)
    }

    /// The built-in password policy; valid results carry a strength.
    #[must_use]
    pub fn password() -> Self {
        Self::Builtin(Builtin::Password)
    }

    /// The built-in name validator, with messages led by `label`.
    #[must_use]
    pub fn name(label: impl Into<String>) -> Self {
        Self::Builtin(Builtin::Name {
            label: label.into(),
        })
    }

    /// The built-in age range check. Text values are parsed leniently.
    #[must_use]
    pub fn age() -> Self {
        Self::Builtin(Builtin::Age)
    }

    /// Fail on missing or blank values with "`label` is required".
    #[must_use]
    pub fn required(label: impl Into<String>) -> Self {
        Self::Builtin(Builtin::Required {
            label: label.into(),
        })
    }

    /// Require the value to equal the value of `field` (password confirmation).
    #[must_use]
    pub fn matches(field: impl Into<String>) -> Self {
        Self::Builtin(Builtin::Matches {
            field: field.into(),
        })
    }

    /// A predicate over the field's own value.
    #[must_use]
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&FieldValue) -> ValidationResult + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(move |value: &FieldValue, _: &FormValues| f(value)))
    }

    /// A predicate that can also read other fields of the form.
    #[must_use]
    pub fn with_form<F>(f: F) -> Self
    where
        F: Fn(&FieldValue, &FormValues) -> ValidationResult + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    /// Wrap any [`Validator`].
    #[must_use]
    pub fn validator(v: impl Validator + 'static) -> Self {
        Self::predicate(move |value| v.validate(value))
    }

    /// Run `rules` in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// [`RuleError::EmptySequence`] if `rules` yields nothing.
    pub fn sequence(rules: impl IntoIterator<Item = Rule>) -> Result<Self, RuleError> {
        let rules: Vec<Rule> = rules.into_iter().collect();
        if rules.is_empty() {
            return Err(RuleError::EmptySequence);
        }
        Ok(Self::Sequence(RuleSequence { rules }))
    }

    /// Evaluate the rule.
    ///
    /// For a sequence, the result of the last entry evaluated is returned:
    /// the first failure, or the final entry's success.
    #[must_use]
    pub fn evaluate(&self, value: &FieldValue, form: &FormValues) -> ValidationResult {
        match self {
            Self::Builtin(builtin) => builtin.evaluate(value, form),
            Self::Predicate(f) => f(value, form),
            Self::Sequence(seq) => {
                let mut last = ValidationResult::valid();
                for rule in &seq.rules {
                    last = rule.evaluate(value, form);
                    if last.is_invalid() {
                        break;
                    }
                }
                last
            }
        }
    }
}

impl From<Builtin> for Rule {
    fn from(builtin: Builtin) -> Self {
        Self::Builtin(builtin)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Sequence(seq) => f.debug_tuple("Sequence").field(&seq.rules).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use footprint_core::ValidationError;
    use footprint_core::result::{ERROR_CODE_MISMATCH, ERROR_CODE_REQUIRED};

    use super::*;

    fn fail(msg: &'static str) -> ValidationResult {
        ValidationResult::invalid(ValidationError::new("custom", msg))
    }

    #[test]
    fn named_resolves_builtins() {
        assert_eq!(Builtin::from_name("email", None, None), Ok(Builtin::Email));
        assert_eq!(
            Builtin::from_name("name", None, None),
            Ok(Builtin::Name {
                label: "Name".into()
            })
        );
        assert_eq!(
            Builtin::from_name("name", Some("First name"), None),
            Ok(Builtin::Name {
                label: "First name".into()
            })
        );
        assert_eq!(
            Builtin::from_name("required", None, None),
            Ok(Builtin::Required {
                label: "This field".into()
            })
        );
    }

    #[test]
    fn every_listed_name_resolves() {
        for name in Builtin::NAMES {
            assert!(
                Builtin::from_name(name, None, Some("password")).is_ok(),
                "{name} should resolve"
            );
        }
    }

    #[test]
    fn unknown_name_fails_fast() {
        let err = Rule::named("zipcode").unwrap_err();
        assert_eq!(
            err,
            RuleError::UnknownValidator {
                name: "zipcode".into()
            }
        );
        assert_eq!(err.to_string(), "unknown validator 'zipcode'");
    }

    #[test]
    fn confirm_password_needs_field() {
        let err = Rule::named("confirmPassword").unwrap_err();
        assert!(matches!(err, RuleError::MissingOption { option: "field", .. }));
    }

    #[test]
    fn matches_reads_other_field() {
        let rule = Rule::matches("password");
        let form = FormValues::new().with("password", "Secr3t!pw");

        assert!(rule.evaluate(&"Secr3t!pw".into(), &form).is_valid());
        let r = rule.evaluate(&"nope".into(), &form);
        assert_eq!(r.error().map(|e| e.code), Some(ERROR_CODE_MISMATCH));
    }

    #[test]
    fn predicate_ignores_form() {
        let rule = Rule::predicate(|v| {
            if v.as_text() == "ok" {
                ValidationResult::valid()
            } else {
                fail("not ok")
            }
        });
        assert!(rule.evaluate(&"ok".into(), &FormValues::new()).is_valid());
        assert_eq!(
            rule.evaluate(&"no".into(), &FormValues::new()).error_message(),
            "not ok"
        );
    }

    #[test]
    fn with_form_sees_other_fields() {
        let rule = Rule::with_form(|v, form| {
            if form.get("country").as_text() == "UK" && v.as_text().is_empty() {
                fail("Postcode is required in the UK")
            } else {
                ValidationResult::valid()
            }
        });
        let uk = FormValues::new().with("country", "UK");
        assert!(rule.evaluate(&"".into(), &uk).is_invalid());
        assert!(rule.evaluate(&"".into(), &FormValues::new()).is_valid());
    }

    #[test]
    fn validator_wrapper() {
        let rule = Rule::validator(footprint_core::Required::new("Nickname"));
        assert_eq!(
            rule.evaluate(&FieldValue::Missing, &FormValues::new())
                .error()
                .map(|e| e.code),
            Some(ERROR_CODE_REQUIRED)
        );
    }

    #[test]
    fn sequence_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let rule = Rule::sequence([
            Rule::required("Email"),
            Rule::email(),
            Rule::predicate(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                ValidationResult::valid()
            }),
        ])
        .unwrap();

        let r = rule.evaluate(&"not-an-email".into(), &FormValues::new());
        assert!(r.error_message().contains("valid email"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(rule.evaluate(&"a@b.io".into(), &FormValues::new()).is_valid());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn sequence_returns_last_evaluated_result() {
        let rule = Rule::sequence([Rule::required("Password"), Rule::password()]).unwrap();
        let r = rule.evaluate(&"StrongP@ssw0rd!".into(), &FormValues::new());
        assert!(r.is_valid());
        assert_eq!(r.strength(), Some(footprint_core::Strength::Strong));
    }

    #[test]
    fn empty_sequence_fails_fast() {
        let err = Rule::sequence([]).unwrap_err();
        assert_eq!(err, RuleError::EmptySequence);
        assert_eq!(err.to_string(), "rule sequence is empty");

        let nested =
            Rule::sequence(Vec::new()).and_then(|inner| Rule::sequence([Rule::email(), inner]));
        assert_eq!(nested.unwrap_err(), RuleError::EmptySequence);

        match Rule::sequence([Rule::email()]) {
            Ok(Rule::Sequence(seq)) => assert_eq!(seq.rules().len(), 1),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn debug_hides_closures() {
        let rule =
            Rule::sequence([Rule::age(), Rule::predicate(|_| ValidationResult::valid())]).unwrap();
        assert_eq!(format!("{rule:?}"), "Sequence([Builtin(Age), Predicate(..)])");
    }
}
