//! Rule sets declared in JSON.

use footprint_forms::{ConfigError, FormValues, RuleError, RuleSet, validate_form};

const SIGN_UP: &str = r#"{
    "email": "email",
    "password": ["required", "password"],
    "confirmPassword": { "validator": "confirmPassword", "field": "password" },
    "firstName": { "validator": "name", "label": "First name" },
    "age": "age"
}"#;

#[test]
fn loads_in_document_order() {
    let rules = RuleSet::from_json(SIGN_UP).unwrap();
    assert_eq!(
        rules.fields().collect::<Vec<_>>(),
        ["email", "password", "confirmPassword", "firstName", "age"]
    );
}

#[test]
fn loaded_rules_validate() {
    let rules = RuleSet::from_json(SIGN_UP).unwrap();
    let values = FormValues::new()
        .with("email", "ada@example.com")
        .with("password", "StrongP@ssw0rd!")
        .with("confirmPassword", "StrongP@ssw0rd")
        .with("firstName", "A")
        .with("age", 40);

    let report = validate_form(&values, &rules);
    assert_eq!(report.error("confirmPassword"), Some("Passwords do not match"));
    assert_eq!(
        report.error("firstName"),
        Some("First name must be at least 2 characters long")
    );
    assert_eq!(report.errors().len(), 2);

    let report = validate_form(&FormValues::new(), &rules);
    assert_eq!(report.error("password"), Some("This field is required"));
}

#[test]
fn confirm_password_without_field_is_rejected() {
    let err = RuleSet::from_json(r#"{ "confirmPassword": "confirmPassword" }"#).unwrap_err();
    match err {
        ConfigError::Rule { field, source } => {
            assert_eq!(field, "confirmPassword");
            assert!(matches!(source, RuleError::MissingOption { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn misspelled_option_is_rejected() {
    let err = RuleSet::from_json(r#"{ "firstName": { "validator": "name", "lable": "First name" } }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)), "unexpected error: {err}");
}

#[test]
fn values_and_report_from_json() {
    let rules = RuleSet::from_json(r#"{ "email": "email", "age": "age" }"#).unwrap();
    let values: FormValues = serde_json::from_str(r#"{ "email": "ADA@example.com", "age": "12" }"#).unwrap();

    let report = validate_form(&values, &rules);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["errors"][0]["field"], "age");
    assert_eq!(
        json["errors"][0]["message"],
        "You must be at least 13 years old to use this service"
    );
}
