//! Catalogs and the validator are shared read-only data.

use std::thread;

use pdfopts::catalog::{Catalog, OutlinePolicy, PdfVersion, Rotation};
use pdfopts::validation::{ConfigValidator, ValidatedConfig};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_types_are_send_and_sync() {
    assert_send_sync::<PdfVersion>();
    assert_send_sync::<OutlinePolicy>();
    assert_send_sync::<Rotation>();
    assert_send_sync::<ConfigValidator>();
    assert_send_sync::<ValidatedConfig>();
}

#[test]
fn test_concurrent_reads_and_validation() {
    let validator = ConfigValidator::new();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                scope.spawn(move || {
                    let rotation = Rotation::values()[worker % Rotation::len()];
                    let version = PdfVersion::values()[worker % PdfVersion::len()];

                    let config = validator
                        .validate(version, OutlinePolicy::Discard, rotation)
                        .unwrap();
                    assert_eq!(config.rotation(), rotation);
                    assert_eq!(Rotation::len(), 4);

                    OutlinePolicy::values().len()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), OutlinePolicy::len());
        }
    });
}
