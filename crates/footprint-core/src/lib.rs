#![forbid(unsafe_code)]

//! Core: field values, validation results, sanitizers, and built-in validators.
//!
//! # Role in Footprint
//! `footprint-core` holds the pure, leaf-level pieces of form handling. Nothing
//! here keeps state: every function maps an input to a fresh output.
//!
//! # How it fits in the system
//! `footprint-forms` builds rule sets, the form engine, and per-form binding
//! state on top of these validators.
//!
//! ```rust
//! use footprint_core::{sanitize, validators, Strength};
//!
//! let email = sanitize::sanitize_email("  Ada@Example.COM ");
//! assert!(validators::email(&email).is_valid());
//!
//! let result = validators::password("StrongP@ssw0rd!");
//! assert_eq!(result.strength(), Some(Strength::Strong));
//! ```

pub mod logging;
pub mod result;
pub mod sanitize;
pub mod validators;
pub mod value;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};

pub use result::{Strength, ValidationError, ValidationResult};
pub use sanitize::{sanitize_email, sanitize_name, sanitize_string};
pub use validators::{Age, ConfirmPassword, Email, Name, Password, Required, Validator};
pub use value::FieldValue;
