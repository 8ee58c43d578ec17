//! Integration tests for the validation entry point.

use pdfopts::catalog::{OutlinePolicy, PdfVersion, Rotation};
use pdfopts::config::{CandidateConfig, RawValue};
use pdfopts::error::{ConfigField, OptionsError};
use pdfopts::validation::ConfigValidator;

#[test]
fn test_end_to_end_success() {
    let config = ConfigValidator::new()
        .validate(
            PdfVersion::Version1_7,
            OutlinePolicy::Discard,
            Rotation::Degrees90,
        )
        .unwrap();

    assert_eq!(config.version(), PdfVersion::Version1_7);
    assert_eq!(config.outline_policy(), OutlinePolicy::Discard);
    assert_eq!(config.rotation(), Rotation::Degrees90);
}

#[test]
fn test_end_to_end_invalid_rotation() {
    let err = ConfigValidator::new()
        .validate(PdfVersion::Version1_7, OutlinePolicy::Discard, 45)
        .unwrap_err();

    assert_eq!(err.field, ConfigField::Rotation);
    assert_eq!(err.value, "45");

    let wrapped = OptionsError::from(err);
    assert_eq!(wrapped.exit_code(), 1);
    assert!(wrapped.to_string().starts_with("Invalid rotation: 45"));
}

#[test]
fn test_validate_is_deterministic() {
    let validator = ConfigValidator::new();
    let candidate = CandidateConfig::new("1.4", RawValue::from("RETAIN"), 270);

    let first = validator.validate_config(&candidate).unwrap();
    let second = validator.validate_config(&candidate).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_version_rejected() {
    let candidate = CandidateConfig::new("", OutlinePolicy::Retain, Rotation::Degrees0);
    let err = ConfigValidator::new()
        .validate_config(&candidate)
        .unwrap_err();

    assert_eq!(err.field, ConfigField::Version);
    assert_eq!(err.value, "");
}
