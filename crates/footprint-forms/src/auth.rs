#![forbid(unsafe_code)]

//! Sign-up and sign-in rule sets.

use std::ops::{Deref, DerefMut};

use footprint_core::ValidationResult;

use crate::binding::FormValidation;
use crate::engine::{FormReport, validate_form};
use crate::rule::Rule;
use crate::rule_set::RuleSet;
use crate::values::FormValues;

/// Email address, on both forms.
pub const FIELD_EMAIL: &str = "email";
/// Password, on both forms.
pub const FIELD_PASSWORD: &str = "password";
/// Password confirmation, sign-up only.
pub const FIELD_CONFIRM_PASSWORD: &str = "confirmPassword";
/// Given name, sign-up only.
pub const FIELD_FIRST_NAME: &str = "firstName";
/// Family name, sign-up only.
pub const FIELD_LAST_NAME: &str = "lastName";
/// Age in whole years, sign-up only.
pub const FIELD_AGE: &str = "age";

/// Rules for the sign-up form.
#[must_use]
pub fn sign_up_rules() -> RuleSet {
    RuleSet::from_checked(vec![
        (FIELD_EMAIL.to_string(), Rule::email()),
        (FIELD_PASSWORD.to_string(), Rule::password()),
        (
            FIELD_CONFIRM_PASSWORD.to_string(),
            Rule::matches(FIELD_PASSWORD),
        ),
        (FIELD_FIRST_NAME.to_string(), Rule::name("First name")),
        (FIELD_LAST_NAME.to_string(), Rule::name("Last name")),
        (FIELD_AGE.to_string(), Rule::age()),
    ])
}

/// Rules for the sign-in form. The password only has to be present.
#[must_use]
pub fn sign_in_rules() -> RuleSet {
    RuleSet::from_checked(vec![
        (FIELD_EMAIL.to_string(), Rule::email()),
        (FIELD_PASSWORD.to_string(), Rule::required("Password")),
    ])
}

/// Validate a sign-up submission.
#[must_use]
pub fn validate_sign_up(values: &FormValues) -> FormReport {
    validate_form(values, &sign_up_rules())
}

/// Validate a sign-in submission.
#[must_use]
pub fn validate_sign_in(values: &FormValues) -> FormReport {
    validate_form(values, &sign_in_rules())
}

/// Binding state for the auth screens, with both rule sets attached.
///
/// Derefs to [`FormValidation`] for touched/error queries.
#[derive(Debug, Clone)]
pub struct AuthValidation {
    state: FormValidation,
    sign_up: RuleSet,
    sign_in: RuleSet,
}

impl Default for AuthValidation {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthValidation {
    /// Fresh state with both auth rule sets attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FormValidation::new(),
            sign_up: sign_up_rules(),
            sign_in: sign_in_rules(),
        }
    }

    /// The rules [`validate_sign_up`](Self::validate_sign_up) applies.
    #[must_use]
    pub fn sign_up_rules(&self) -> &RuleSet {
        &self.sign_up
    }

    /// The rules [`validate_sign_in`](Self::validate_sign_in) applies.
    #[must_use]
    pub fn sign_in_rules(&self) -> &RuleSet {
        &self.sign_in
    }

    /// Validate the whole sign-up form, recording each field.
    pub fn validate_sign_up(&mut self, values: &FormValues) -> FormReport {
        self.state.validate_all(values, &self.sign_up)
    }

    /// Validate the whole sign-in form, recording each field.
    pub fn validate_sign_in(&mut self, values: &FormValues) -> FormReport {
        self.state.validate_all(values, &self.sign_in)
    }

    /// Validate one sign-up field as the user edits it.
    ///
    /// Returns `None` if the sign-up form has no such field.
    pub fn validate_sign_up_field(
        &mut self,
        field: &str,
        values: &FormValues,
    ) -> Option<ValidationResult> {
        let rule = self.sign_up.get(field)?;
        Some(self.state.validate_field_in(field, values, rule))
    }
}

impl Deref for AuthValidation {
    type Target = FormValidation;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl DerefMut for AuthValidation {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.state
    }
}
