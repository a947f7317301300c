#![forbid(unsafe_code)]

//! Whole-form validation.

use footprint_core::ValidationResult;

use crate::rule_set::RuleSet;
use crate::values::FormValues;

/// A failing field and the message to show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldError {
    /// Field name.
    pub field: String,
    /// Display message.
    pub message: String,
}

/// Outcome of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormReport {
    errors: Vec<FieldError>,
}

impl FormReport {
    /// Returns `true` if no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failing fields in rule-set order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Returns `true` if `field` failed.
    #[must_use]
    pub fn has_error(&self, field: &str) -> bool {
        self.error(field).is_some()
    }

    /// Consume the report, returning the failing fields.
    #[must_use]
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

/// Validate every field of `rules` against `values`.
///
/// Fields are checked in rule-set order. A field absent from `values` is
/// validated as [`FieldValue::Missing`](footprint_core::FieldValue::Missing).
///
/// ```rust
/// use footprint_forms::{validate_form, FormValues, Rule, RuleSet};
///
/// let rules = RuleSet::builder()
///     .field("email", Rule::email())
///     .field("name", Rule::name("Name"))
///     .build()?;
/// let values = FormValues::new().with("email", "bad").with("name", "J");
///
/// let report = validate_form(&values, &rules);
/// assert!(!report.is_valid());
/// assert!(report.has_error("email") && report.has_error("name"));
/// # Ok::<(), footprint_forms::RuleError>(())
/// ```
#[must_use]
pub fn validate_form(values: &FormValues, rules: &RuleSet) -> FormReport {
    validate_form_with(values, rules, |_, _| {})
}

/// Like [`validate_form`], calling `observe` with each field's result.
pub(crate) fn validate_form_with(
    values: &FormValues,
    rules: &RuleSet,
    mut observe: impl FnMut(&str, &ValidationResult),
) -> FormReport {
    let mut errors = Vec::new();
    for (field, rule) in rules.iter() {
        let result = rule.evaluate(values.get(field), values);
        observe(field, &result);
        if let Some(error) = result.error() {
            tracing::debug!(field, code = error.code, "field failed validation");
            errors.push(FieldError {
                field: field.to_string(),
                message: error.format_message(),
            });
        }
    }
    tracing::debug!(
        fields = rules.len(),
        failed = errors.len(),
        "form validated"
    );
    FormReport { errors }
}

#[cfg(test)]
mod tests {
    use footprint_core::ValidationError;

    use super::*;
    use crate::rule::Rule;

    fn email_and_name() -> RuleSet {
        RuleSet::builder()
            .field("email", Rule::named("email").unwrap())
            .field("name", Rule::name("Name"))
            .build()
            .unwrap()
    }

    #[test]
    fn valid_form_has_no_errors() {
        let values = FormValues::new()
            .with("email", "test@example.com")
            .with("name", "John Doe");
        let report = validate_form(&values, &email_and_name());
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn invalid_form_reports_each_field() {
        let values = FormValues::new()
            .with("email", "invalid-email")
            .with("name", "J");
        let report = validate_form(&values, &email_and_name());
        assert!(!report.is_valid());
        assert_eq!(
            report.error("email"),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            report.error("name"),
            Some("Name must be at least 2 characters long")
        );
    }

    #[test]
    fn errors_follow_rule_order() {
        let rules = RuleSet::builder()
            .field("name", Rule::name("Name"))
            .field("email", Rule::email())
            .build()
            .unwrap();
        let report = validate_form(&FormValues::new(), &rules);
        let fields: Vec<_> = report.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["name", "email"]);
    }

    #[test]
    fn missing_values_validate_as_missing() {
        let report = validate_form(&FormValues::new(), &email_and_name());
        assert_eq!(report.error("email"), Some("Email is required"));
        assert_eq!(report.error("name"), Some("Name is required"));
    }

    #[test]
    fn fields_without_rules_are_ignored() {
        let values = FormValues::new()
            .with("email", "a@b.io")
            .with("name", "Ada")
            .with("nickname", "!!!");
        assert!(validate_form(&values, &email_and_name()).is_valid());
    }

    #[test]
    fn sequence_rule_in_form() {
        let rules = RuleSet::builder()
            .field(
                "bio",
                Rule::sequence([
                    Rule::required("Bio"),
                    Rule::predicate(|v| {
                        if v.as_text().len() > 10 {
                            ValidationResult::invalid(ValidationError::new(
                                "too_long",
                                "Bio is too long",
                            ))
                        } else {
                            ValidationResult::valid()
                        }
                    }),
                ])
                .unwrap(),
            )
            .build()
            .unwrap();

        let report = validate_form(&FormValues::new().with("bio", ""), &rules);
        assert_eq!(report.error("bio"), Some("Bio is required"));
        let report = validate_form(&FormValues::new().with("bio", "far too long"), &rules);
        assert_eq!(report.error("bio"), Some("Bio is too long"));
        assert!(validate_form(&FormValues::new().with("bio", "short"), &rules).is_valid());
    }

    #[test]
    fn observer_sees_every_field() {
        let mut seen = Vec::new();
        let values = FormValues::new().with("email", "a@b.io");
        validate_form_with(&values, &email_and_name(), |field, result| {
            seen.push((field.to_string(), result.is_valid()));
        });
        assert_eq!(
            seen,
            [("email".to_string(), true), ("name".to_string(), false)]
        );
    }

    #[test]
    fn into_errors_hands_back_list() {
        let report = validate_form(&FormValues::new(), &email_and_name());
        assert_eq!(report.into_errors().len(), 2);
    }
}
