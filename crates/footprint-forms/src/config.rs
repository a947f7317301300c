#![forbid(unsafe_code)]

//! Declarative rule sets loaded from JSON.
//!
//! ```json
//! {
//!   "email": "email",
//!   "password": ["required", "password"],
//!   "confirmPassword": { "validator": "confirmPassword", "field": "password" },
//!   "firstName": { "validator": "name", "label": "First name" }
//! }
//! ```
//!
//! Every name is resolved while loading. An unknown validator, a missing
//! option, an empty list or a repeated field is an error, never a rule that
//! silently passes. Fields are evaluated in document order.
//!
//! Feature-gated under `config`.

use std::fmt;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

use crate::rule::{Builtin, Rule, RuleError};
use crate::rule_set::RuleSet;

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors raised while loading a rule set.
#[derive(Debug)]
pub enum ConfigError {
    /// The document is not valid JSON or has the wrong shape.
    Json(serde_json::Error),
    /// A field's rule could not be resolved.
    Rule { field: String, source: RuleError },
    /// The rules resolved but do not form a valid set.
    RuleSet(RuleError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "invalid rule set document: {e}"),
            Self::Rule { field, source } => write!(f, "field '{field}': {source}"),
            Self::RuleSet(e) => write!(f, "invalid rule set: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Rule { source, .. } => Some(source),
            Self::RuleSet(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Specs
// ─────────────────────────────────────────────────────────────────────────────

/// An unresolved rule as written in a document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RuleSpec {
    /// A validator name, e.g. `"email"`.
    Name(String),
    /// Rules run in order, stopping at the first failure.
    Sequence(Vec<RuleSpec>),
    /// A validator with options.
    Detailed(DetailedSpec),
}

/// A validator name plus its options. Unknown keys are rejected, so a
/// misspelled option never falls back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetailedSpec {
    /// Built-in validator name, as accepted by [`Builtin::from_name`].
    pub validator: String,
    /// Message label for `name` and `required`.
    #[serde(default)]
    pub label: Option<String>,
    /// The field a `confirmPassword` rule compares against.
    #[serde(default)]
    pub field: Option<String>,
}

impl DetailedSpec {
    fn resolve(&self) -> Result<Rule, RuleError> {
        Builtin::from_name(&self.validator, self.label.as_deref(), self.field.as_deref())
            .map(Rule::Builtin)
    }
}

impl RuleSpec {
    /// Resolve into a [`Rule`].
    pub fn resolve(&self) -> Result<Rule, RuleError> {
        match self {
            Self::Name(name) => Rule::named(name),
            Self::Sequence(specs) => specs
                .iter()
                .map(RuleSpec::resolve)
                .collect::<Result<Vec<_>, _>>()
                .and_then(Rule::sequence),
            Self::Detailed(spec) => spec.resolve(),
        }
    }
}

/// An unresolved rule set: field specs in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSetSpec {
    fields: Vec<(String, RuleSpec)>,
}

impl RuleSetSpec {
    /// Field specs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSpec)> {
        self.fields.iter().map(|(field, spec)| (field.as_str(), spec))
    }

    /// Resolve every field and build the rule set.
    pub fn resolve(&self) -> Result<RuleSet, ConfigError> {
        let mut builder = RuleSet::builder();
        for (field, spec) in &self.fields {
            let rule = spec.resolve().map_err(|source| ConfigError::Rule {
                field: field.clone(),
                source,
            })?;
            builder = builder.field(field.as_str(), rule);
        }
        builder.build().map_err(ConfigError::RuleSet)
    }
}

impl<'de> Deserialize<'de> for RuleSetSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = RuleSetSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from field name to rule")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((field, spec)) = map.next_entry::<String, RuleSpec>()? {
                    fields.push((field, spec));
                }
                Ok(RuleSetSpec { fields })
            }
        }

        deserializer.deserialize_map(SpecVisitor)
    }
}

impl RuleSet {
    /// Load and resolve a rule set from a JSON document.
    ///
    /// ```rust
    /// use footprint_forms::{validate_form, FormValues, RuleSet};
    ///
    /// let rules = RuleSet::from_json(r#"{ "email": "email", "age": "age" }"#)?;
    /// let report = validate_form(&FormValues::new().with("age", 30), &rules);
    /// assert_eq!(report.error("email"), Some("Email is required"));
    /// # Ok::<(), footprint_forms::ConfigError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let spec: RuleSetSpec = serde_json::from_str(json)?;
        let rules = spec.resolve()?;
        tracing::debug!(fields = rules.len(), "rule set loaded from JSON");
        Ok(rules)
    }
}
