#![forbid(unsafe_code)]

//! Per-form validation state for UI consumption.
//!
//! A [`FormValidation`] is created when a form is mounted and dropped with
//! it. It remembers the last error of each field and which fields the user
//! has interacted with, so the UI can hold errors back until a field has
//! been touched.

use std::collections::{HashMap, HashSet};

use footprint_core::{FieldValue, ValidationResult};

use crate::engine::{FormReport, validate_form_with};
use crate::rule::Rule;
use crate::rule_set::RuleSet;
use crate::values::FormValues;

/// Error and touched state for one form instance.
///
/// A field present in the error map failed its last validation. Absence
/// means it passed or was never checked; consult [`is_touched`] to tell
/// the two apart.
///
/// [`is_touched`]: FormValidation::is_touched
#[derive(Debug, Clone, Default)]
pub struct FormValidation {
    /// Last error message per field.
    errors: HashMap<String, String>,
    /// Fields the user has interacted with.
    touched: HashSet<String>,
    /// Whether a submit is in progress.
    submitting: bool,
}

impl FormValidation {
    /// Fresh state: no errors, nothing touched.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Validate one field on its own and record the outcome.
    ///
    /// Predicate rules see an empty form; use [`validate_field_in`] for
    /// rules that read other fields.
    ///
    /// [`validate_field_in`]: FormValidation::validate_field_in
    pub fn validate_field(
        &mut self,
        field: &str,
        value: &FieldValue,
        rule: &Rule,
    ) -> ValidationResult {
        let result = rule.evaluate(value, &FormValues::new());
        self.record(field, &result);
        result
    }

    /// Validate `field` reading its value, and any other field a rule needs,
    /// from `form`.
    pub fn validate_field_in(
        &mut self,
        field: &str,
        form: &FormValues,
        rule: &Rule,
    ) -> ValidationResult {
        let result = rule.evaluate(form.get(field), form);
        self.record(field, &result);
        result
    }

    /// Validate every field of `rules`, recording each outcome.
    pub fn validate_all(&mut self, values: &FormValues, rules: &RuleSet) -> FormReport {
        validate_form_with(values, rules, |field, result| self.record(field, result))
    }

    fn record(&mut self, field: &str, result: &ValidationResult) {
        match result.error() {
            Some(error) => {
                self.errors.insert(field.to_string(), error.format_message());
            }
            None => {
                self.errors.remove(field);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Touched State
    // -------------------------------------------------------------------------

    /// Mark a field as interacted with. Idempotent.
    pub fn touch_field(&mut self, field: &str) {
        if !self.touched.contains(field) {
            self.touched.insert(field.to_string());
        }
    }

    /// Returns `true` if the field has been touched.
    #[must_use]
    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// Touched field names, sorted.
    #[must_use]
    pub fn touched_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.touched.iter().map(String::as_str).collect();
        fields.sort_unstable();
        fields
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Returns `true` if the field is touched and currently failing.
    #[must_use]
    pub fn field_has_error(&self, field: &str) -> bool {
        self.is_touched(field) && self.errors.contains_key(field)
    }

    /// The error to show for `field`: present only once the field is touched.
    #[must_use]
    pub fn field_error(&self, field: &str) -> Option<&str> {
        if self.field_has_error(field) {
            self.error(field)
        } else {
            None
        }
    }

    /// The field's last error, whether or not it is touched.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Returns `true` if no field is currently failing.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if any field has been touched.
    #[must_use]
    pub fn has_been_touched(&self) -> bool {
        !self.touched.is_empty()
    }

    // -------------------------------------------------------------------------
    // Submit / Reset
    // -------------------------------------------------------------------------

    /// Returns `true` while a submit is in progress.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Flag the start or end of a submit.
    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// Forget all errors and touched state.
    pub fn clear(&mut self) {
        tracing::trace!(
            errors = self.errors.len(),
            touched = self.touched.len(),
            "clearing form validation"
        );
        self.errors.clear();
        self.touched.clear();
        self.submitting = false;
    }
}
