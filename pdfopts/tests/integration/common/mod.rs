//! Shared helpers for pdfopts integration tests.

use std::collections::HashSet;
use std::io::Write;

use pdfopts::Catalog;

/// Write `json` to a temporary file that lives as long as the returned handle.
pub fn selection_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes())
        .expect("Failed to write selection file");
    file.flush().expect("Failed to flush selection file");
    file
}

/// Assert that every member of `C` has a non-empty name unique within `C`.
pub fn assert_unique_names<C: Catalog>() {
    let mut seen = HashSet::new();
    for member in C::values() {
        let name = member.name();
        assert!(!name.is_empty(), "{} has an empty name", C::CATALOG);
        assert!(seen.insert(name), "{} repeats {name}", C::CATALOG);
    }
}
