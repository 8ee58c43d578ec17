//! Integration tests for the catalog contracts menus depend on.

use pdfopts::catalog::{Catalog, OutlinePolicy, PdfVersion, Rotation};
use pdfopts::error::OptionsError;
use rstest::rstest;

use crate::common::assert_unique_names;

#[test]
fn test_names_unique_and_non_empty() {
    assert_unique_names::<PdfVersion>();
    assert_unique_names::<OutlinePolicy>();
    assert_unique_names::<Rotation>();
}

#[test]
fn test_values_idempotent() {
    assert_eq!(PdfVersion::values(), PdfVersion::values());
    assert_eq!(OutlinePolicy::values(), OutlinePolicy::values());
    assert_eq!(Rotation::values(), Rotation::values());

    // Same static table every time.
    assert!(std::ptr::eq(Rotation::values(), Rotation::values()));
}

#[test]
fn test_version_catalog_contract() {
    let versions = PdfVersion::values();
    assert!(versions.len() >= 4);

    let first = PdfVersion::by_ordinal(0).unwrap();
    assert!(first.name().contains("VERSION"));

    let modern = versions
        .iter()
        .filter(|v| v.name().contains("1_6") || v.name().contains("1_7"))
        .count();
    assert!(modern >= 2);

    assert!(PdfVersion::Version1_7.ordinal() > PdfVersion::Version1_4.ordinal());
}

#[test]
fn test_version_legacy_and_modern_supported() {
    assert!(PdfVersion::contains("VERSION_1_7"));
    assert!(PdfVersion::contains("VERSION_1_4") || PdfVersion::contains("VERSION_1_5"));
}

#[test]
fn test_version_by_ordinal_out_of_range() {
    match PdfVersion::by_ordinal(999) {
        Err(OptionsError::OutOfRange { index, len, .. }) => {
            assert_eq!(index, 999);
            assert_eq!(len, PdfVersion::len());
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn test_outline_catalog_contract() {
    let policies = OutlinePolicy::values();
    assert!(policies.len() >= 2);
    assert!(policies.iter().any(|p| p.name() == "RETAIN"));
    assert!(policies.iter().any(|p| p.name() == "DISCARD"));
}

#[test]
fn test_rotation_catalog_contract() {
    assert_eq!(Rotation::values().len(), 4);

    let mut degrees: Vec<u16> = Rotation::values().iter().map(|r| r.degrees()).collect();
    degrees.sort_unstable();
    assert_eq!(degrees, [0, 90, 180, 270]);
    assert_eq!(Rotation::Degrees0.degrees(), 0);
}

#[rstest]
#[case(0)]
#[case(90)]
#[case(180)]
#[case(270)]
fn test_every_legal_angle_exists(#[case] degrees: i64) {
    let rotation = Rotation::by_degrees(degrees).unwrap();
    assert_eq!(i64::from(rotation.degrees()), degrees);
}

#[test]
fn test_rotation_45_rejected() {
    assert!(matches!(
        Rotation::by_degrees(45),
        Err(OptionsError::InvalidAngle { degrees: 45 })
    ));
    assert!(!Rotation::values().iter().any(|r| r.degrees() == 45));
}

#[test]
fn test_unknown_names_are_typed_errors() {
    let err = OutlinePolicy::from_name("KEEP_SOME").unwrap_err();
    assert!(err.is_lookup_error());
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("KEEP_SOME"));
}
