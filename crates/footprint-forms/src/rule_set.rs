#![forbid(unsafe_code)]

//! Ordered per-form mapping from field name to rule.

use std::collections::HashSet;

use crate::rule::{Rule, RuleError};

/// The rules for one form, in evaluation order.
///
/// Build with [`RuleSet::builder`]:
///
/// ```rust
/// use footprint_forms::{Rule, RuleSet};
///
/// let rules = RuleSet::builder()
///     .field("email", Rule::named("email")?)
///     .field("name", Rule::name("Name"))
///     .build()?;
///
/// assert_eq!(rules.fields().collect::<Vec<_>>(), ["email", "name"]);
/// # Ok::<(), footprint_forms::RuleError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<(String, Rule)>,
}

impl RuleSet {
    /// Start building a rule set.
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Wrap entries known to have distinct fields.
    pub(crate) fn from_checked(rules: Vec<(String, Rule)>) -> Self {
        debug_assert!(check(&rules).is_ok(), "rule set entries are malformed");
        Self { rules }
    }

    /// Iterate over `(field, rule)` in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(field, rule)| (field.as_str(), rule))
    }

    /// Field names in evaluation order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(field, _)| field.as_str())
    }

    /// The rule for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, rule)| rule)
    }

    /// Number of fields with a rule.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Builder for [`RuleSet`]. Problems surface from [`RuleSetBuilder::build`].
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: Vec<(String, Rule)>,
}

impl RuleSetBuilder {
    /// Add a rule for `field`. Fields are evaluated in the order added.
    #[must_use]
    pub fn field(mut self, field: impl Into<String>, rule: impl Into<Rule>) -> Self {
        self.rules.push((field.into(), rule.into()));
        self
    }

    /// Finish the rule set.
    ///
    /// # Errors
    ///
    /// [`RuleError::DuplicateField`] if a field was added twice.
    pub fn build(self) -> Result<RuleSet, RuleError> {
        check(&self.rules)?;
        tracing::trace!(fields = self.rules.len(), "rule set built");
        Ok(RuleSet { rules: self.rules })
    }
}

fn check(rules: &[(String, Rule)]) -> Result<(), RuleError> {
    let mut seen = HashSet::with_capacity(rules.len());
    for (field, _) in rules {
        if !seen.insert(field.as_str()) {
            return Err(RuleError::DuplicateField {
                field: field.clone(),
            });
        }
    }
    Ok(())
}
