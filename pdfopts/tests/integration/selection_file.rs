//! Integration tests for saved selections.

use pdfopts::catalog::{OutlinePolicy, PdfVersion, Rotation};
use pdfopts::config::{RawValue, Selection};
use pdfopts::error::{ConfigField, OptionsError};
use pdfopts::validation::ConfigValidator;
use rstest::rstest;

use crate::common::selection_file;

#[tokio::test]
async fn test_load_and_validate() {
    let file = selection_file(
        r#"{ "version": "VERSION_1_7", "outline_policy": "DISCARD", "rotation": 90 }"#,
    );

    let selection = Selection::load(file.path()).await.unwrap();
    let config = ConfigValidator::new()
        .validate_config(&selection.into_candidate())
        .unwrap();

    assert_eq!(config.version(), PdfVersion::Version1_7);
    assert_eq!(config.outline_policy(), OutlinePolicy::Discard);
    assert_eq!(config.rotation(), Rotation::Degrees90);
}

#[tokio::test]
async fn test_load_partial_uses_defaults() {
    let file = selection_file(r#"{ "version": "1.5" }"#);

    let selection = Selection::load(file.path()).await.unwrap();
    let config = ConfigValidator::new()
        .validate_config(&selection.into_candidate())
        .unwrap();

    assert_eq!(config.version(), PdfVersion::Version1_5);
    assert_eq!(config.outline_policy(), OutlinePolicy::Retain);
    assert_eq!(config.rotation(), Rotation::Degrees0);
}

#[tokio::test]
async fn test_overrides_fix_bad_saved_value() {
    let file = selection_file(r#"{ "version": "VERSION_1_7", "rotation": 45 }"#);
    let saved = Selection::load(file.path()).await.unwrap();

    let validator = ConfigValidator::new();
    let err = validator
        .validate_config(&saved.clone().into_candidate())
        .unwrap_err();
    assert_eq!(err.field, ConfigField::Rotation);
    assert_eq!(err.value, "45");

    let overrides = Selection {
        rotation: Some(RawValue::Number(180)),
        ..Selection::default()
    };
    let config = validator
        .validate_config(&saved.merge(overrides).into_candidate())
        .unwrap();
    assert_eq!(config.rotation(), Rotation::Degrees180);
}

#[tokio::test]
async fn test_load_rejects_unknown_fields() {
    let file = selection_file(r#"{ "version": "VERSION_1_7", "compression": "maximum" }"#);

    let err = Selection::load(file.path()).await.unwrap_err();
    assert!(matches!(err, OptionsError::InvalidConfigFile { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[rstest]
#[case(r#"{ "version": "VERSION_1_7", "rotation": null }"#, "rotation")]
#[case(r#"{ "version": "VERSION_1_7", "outline_policy": null }"#, "outline_policy")]
#[case(r#"{ "version": null }"#, "version")]
#[case(r#"{ "version": "VERSION_1_7", "rotation": 90.0 }"#, "rotation")]
#[case(r#"{ "version": "VERSION_1_7", "rotation": 9223372036854775808 }"#, "rotation")]
#[tokio::test]
async fn test_load_rejects_present_but_unusable_values(#[case] json: &str, #[case] field: &str) {
    let file = selection_file(json);

    match Selection::load(file.path()).await {
        Err(OptionsError::InvalidConfigFile { reason, .. }) => {
            assert!(reason.contains(field), "{reason}");
        }
        other => panic!("expected InvalidConfigFile, got {other:?}"),
    }
}
