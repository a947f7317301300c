#![forbid(unsafe_code)]

//! Rule sets, form validation, and per-form binding state for Footprint.
//!
//! # Role in Footprint
//! `footprint-forms` turns the pure validators of `footprint-core` into
//! form-level behavior: which rule guards which field, what a whole
//! submission looks like when validated, and which errors the UI should
//! show right now.
//!
//! # Example
//!
//! ```rust
//! use footprint_forms::{FormValidation, FormValues, Rule, RuleSet};
//!
//! let rules = RuleSet::builder()
//!     .field("email", Rule::email())
//!     .field("password", Rule::sequence([Rule::required("Password"), Rule::password()])?)
//!     .build()?;
//!
//! let mut form = FormValidation::new();
//! let values = FormValues::new().with("email", "ada@example").with("password", "");
//!
//! let report = form.validate_all(&values, &rules);
//! assert!(!report.is_valid());
//!
//! // Errors stay hidden until the user has touched the field.
//! assert_eq!(form.field_error("email"), None);
//! form.touch_field("email");
//! assert_eq!(form.field_error("email"), Some("Please enter a valid email address"));
//! # Ok::<(), footprint_forms::RuleError>(())
//! ```
//!
//! # Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/deserialize [`FormValues`] and [`FormReport`] |
//! | `config` | Load rule sets from JSON ([`RuleSet::from_json`]) |
//! | `tracing` | Also route `footprint-core` logging through `tracing` |

pub mod auth;
pub mod binding;
pub mod engine;
pub mod rule;
pub mod rule_set;
pub mod values;

#[cfg(feature = "config")]
pub mod config;

pub use auth::{AuthValidation, sign_in_rules, sign_up_rules, validate_sign_in, validate_sign_up};
pub use binding::FormValidation;
#[cfg(feature = "config")]
pub use config::{ConfigError, DetailedSpec, RuleSetSpec, RuleSpec};
pub use engine::{FieldError, FormReport, validate_form};
pub use rule::{Builtin, Rule, RuleError, RuleSequence};
pub use rule_set::{RuleSet, RuleSetBuilder};
pub use values::FormValues;

pub use footprint_core::{FieldValue, Strength, ValidationError, ValidationResult};
