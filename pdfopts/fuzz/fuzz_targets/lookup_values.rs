#![no_main]

use libfuzzer_sys::fuzz_target;
use pdfopts::{
    Catalog, CandidateConfig, ConfigValidator, OutlinePolicy, PdfVersion, RawValue, Rotation,
};

fuzz_target!(|data: &[u8]| {
    let text = std::str::from_utf8(data).unwrap_or("");

    // Lookups reject unknown input with an error, never a panic or a fallback.
    if let Ok(version) = PdfVersion::from_name(text) {
        assert_eq!(version.name(), text);
    }
    if let Ok(policy) = OutlinePolicy::from_name(text) {
        assert_eq!(policy.name(), text);
    }

    if data.len() >= 8 {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[..8]);
        let degrees = i64::from_le_bytes(bytes);

        match Rotation::by_degrees(degrees) {
            Ok(rotation) => assert_eq!(i64::from(rotation.degrees()), degrees),
            Err(_) => assert!(degrees % 90 != 0 || !(0..360).contains(&degrees)),
        }
        let _ = Rotation::normalized(degrees);
        let _ = PdfVersion::by_ordinal(degrees as usize);
    }

    let candidate = CandidateConfig::new(
        RawValue::from(text),
        RawValue::from(text),
        RawValue::from(text),
    );
    let validator = ConfigValidator::new();
    let fail_fast = validator.validate_config(&candidate);
    let all = validator.validate_all(&candidate);
    assert_eq!(fail_fast.is_ok(), all.is_ok());
});
